use async_graphql::SimpleObject;

#[derive(SimpleObject)]
pub struct Recommendation {
    pub concern: String,
    pub title: String,
    pub desc: String,
}

impl Recommendation {
    pub fn new(concern: &str, recommendation: &models::recommendation::Recommendation) -> Self {
        Recommendation {
            concern: concern.to_string(),
            title: recommendation.title.to_string(),
            desc: recommendation.desc.to_string(),
        }
    }
}
