use serde::Deserialize;

use crate::domain::tag::{NewTag, UpdateTag};

/// JSON body accepted when creating or renaming a tag.
#[derive(Debug, Clone, Deserialize)]
pub struct TagForm {
    pub tag_name: String,
}

impl TagForm {
    pub fn into_new_tag(self) -> NewTag {
        NewTag::new(self.tag_name)
    }

    pub fn into_update_tag(self) -> UpdateTag {
        UpdateTag::new(self.tag_name)
    }
}
