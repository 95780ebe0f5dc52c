//! Brand entity model and DTOs.
//!
//! A brand belongs to a client through `client_id` and owns two nested
//! objects, `brand_guideline` and `brand_reference`, which are always
//! present on a stored brand. Updates merge these two objects one level
//! deep: a patch that carries only some of their keys keeps the others.
//! Every other top-level field follows the flat rule.

use brandhub_core::filter::Listable;
use brandhub_core::merge::{merge_extra, merge_nested, overlay, Extra, Merge};
use brandhub_core::types::RecordId;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Nested objects
// ---------------------------------------------------------------------------

/// Voice and visual identity rules for a brand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandGuideline {
    pub brand_voice: String,
    pub colors: Vec<String>,
    pub typography: Vec<String>,
    pub imagery_guidelines: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Partial [`BrandGuideline`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrandGuidelinePatch {
    pub brand_voice: Option<String>,
    pub colors: Option<Vec<String>>,
    pub typography: Option<Vec<String>>,
    pub imagery_guidelines: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Merge for BrandGuideline {
    type Patch = BrandGuidelinePatch;

    fn merge(&self, patch: &BrandGuidelinePatch) -> Self {
        Self {
            brand_voice: overlay(&self.brand_voice, patch.brand_voice.as_ref()),
            colors: overlay(&self.colors, patch.colors.as_ref()),
            typography: overlay(&self.typography, patch.typography.as_ref()),
            imagery_guidelines: overlay(
                &self.imagery_guidelines,
                patch.imagery_guidelines.as_ref(),
            ),
            extra: merge_extra(&self.extra, &patch.extra),
        }
    }
}

/// Reference material attached to a brand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandReference {
    pub supplemental_instruction: String,
    pub reference_web_pages: Vec<String>,
    pub uploaded_files: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Partial [`BrandReference`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrandReferencePatch {
    pub supplemental_instruction: Option<String>,
    pub reference_web_pages: Option<Vec<String>>,
    pub uploaded_files: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Merge for BrandReference {
    type Patch = BrandReferencePatch;

    fn merge(&self, patch: &BrandReferencePatch) -> Self {
        Self {
            supplemental_instruction: overlay(
                &self.supplemental_instruction,
                patch.supplemental_instruction.as_ref(),
            ),
            reference_web_pages: overlay(
                &self.reference_web_pages,
                patch.reference_web_pages.as_ref(),
            ),
            uploaded_files: overlay(&self.uploaded_files, patch.uploaded_files.as_ref()),
            extra: merge_extra(&self.extra, &patch.extra),
        }
    }
}

// ---------------------------------------------------------------------------
// Brand
// ---------------------------------------------------------------------------

/// A record from the `brand` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: RecordId,
    #[serde(default)]
    pub client_id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand_guideline: BrandGuideline,
    #[serde(default)]
    pub brand_reference: BrandReference,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Brand {
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "client_id",
        "name",
        "brand_guideline",
        "brand_reference",
    ];
}

/// DTO for creating a brand. `client_id` comes from the URL path.
///
/// Nested objects may be omitted or partial; missing keys take the
/// defaults of [`BrandGuideline`] and [`BrandReference`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateBrand {
    pub name: String,
    pub brand_guideline: Option<BrandGuidelinePatch>,
    pub brand_reference: Option<BrandReferencePatch>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl CreateBrand {
    /// The guideline a new brand starts with.
    pub fn guideline(&self) -> BrandGuideline {
        merge_nested(&BrandGuideline::default(), self.brand_guideline.as_ref())
    }

    /// The reference a new brand starts with.
    pub fn reference(&self) -> BrandReference {
        merge_nested(&BrandReference::default(), self.brand_reference.as_ref())
    }
}

/// DTO for updating an existing brand. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateBrand {
    pub client_id: Option<RecordId>,
    pub name: Option<String>,
    pub brand_guideline: Option<BrandGuidelinePatch>,
    pub brand_reference: Option<BrandReferencePatch>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Merge for Brand {
    type Patch = UpdateBrand;

    fn merge(&self, patch: &UpdateBrand) -> Self {
        Self {
            id: self.id.clone(),
            client_id: overlay(&self.client_id, patch.client_id.as_ref()),
            name: overlay(&self.name, patch.name.as_ref()),
            brand_guideline: merge_nested(&self.brand_guideline, patch.brand_guideline.as_ref()),
            brand_reference: merge_nested(&self.brand_reference, patch.brand_reference.as_ref()),
            extra: merge_extra(&self.extra, &patch.extra),
        }
    }
}

impl Listable for Brand {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "client_id" => Some(&self.client_id),
            "name" => Some(&self.name),
            other => self.extra.get(other).and_then(|v| v.as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
