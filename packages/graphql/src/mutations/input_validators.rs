use async_graphql::InputObject;
use models::submission::Submission;
use services::validation::input_validator::{InputValidator, ValidationErrors};
use services::validation::SelectionPolicy;

#[derive(InputObject, Clone)]
pub struct SkinAnalysisInput {
    pub name: String,
    pub email: String,
    pub skin_type: String,
    pub concern: String,
    #[graphql(default)]
    pub outcome: String,
    #[graphql(default)]
    pub routine: String,
    #[graphql(default)]
    pub condition: String,
}

impl From<SkinAnalysisInput> for Submission {
    fn from(input: SkinAnalysisInput) -> Self {
        Submission {
            name: input.name,
            email: input.email,
            skin_type: input.skin_type,
            concern: input.concern,
            outcome: input.outcome,
            routine: input.routine,
            condition: input.condition,
        }
    }
}

impl InputValidator for SkinAnalysisInput {
    fn validate(&self, policy: SelectionPolicy) -> Result<(), ValidationErrors> {
        Submission::from(self.clone()).validate(policy)
    }
}
