use async_graphql::SimpleObject;
use models::submission::Submission;

/// The visitor's answers, echoed back next to the recommendation.
#[derive(SimpleObject)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub skin_type: String,
    pub concern: String,
    pub outcome: String,
    pub routine: String,
    pub condition: String,
}

impl From<Submission> for Profile {
    fn from(s: Submission) -> Self {
        Profile {
            name: s.name,
            email: s.email,
            skin_type: s.skin_type,
            concern: s.concern,
            outcome: s.outcome,
            routine: s.routine,
            condition: s.condition,
        }
    }
}
