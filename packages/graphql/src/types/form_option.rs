use async_graphql::SimpleObject;
use models::choices::{Concern, SkinType};

#[derive(SimpleObject)]
pub struct FormOption {
    pub value: String,
    pub label: String,
}

impl From<SkinType> for FormOption {
    fn from(skin_type: SkinType) -> Self {
        FormOption {
            value: skin_type.as_str().to_string(),
            label: skin_type.label().to_string(),
        }
    }
}

impl From<Concern> for FormOption {
    fn from(concern: Concern) -> Self {
        FormOption {
            value: concern.as_str().to_string(),
            label: concern.label().to_string(),
        }
    }
}
