use serde::Serialize;
use std::fmt;

/// Identifier of a single form field, as the presentation layer names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    SkinType,
    Concern,
    Outcome,
    Routine,
    Condition,
}

impl FieldName {
    pub const ALL: [FieldName; 7] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::SkinType,
        FieldName::Concern,
        FieldName::Outcome,
        FieldName::Routine,
        FieldName::Condition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::SkinType => "skinType",
            FieldName::Concern => "concern",
            FieldName::Outcome => "outcome",
            FieldName::Routine => "routine",
            FieldName::Condition => "condition",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a visitor typed into the analysis form.
///
/// Values are kept exactly as entered; trimming and membership checks
/// belong to validation, not to the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub skin_type: String,
    pub concern: String,
    pub outcome: String,
    pub routine: String,
    pub condition: String,
}

impl Submission {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::SkinType => &self.skin_type,
            FieldName::Concern => &self.concern,
            FieldName::Outcome => &self.outcome,
            FieldName::Routine => &self.routine,
            FieldName::Condition => &self.condition,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::SkinType => &mut self.skin_type,
            FieldName::Concern => &mut self.concern,
            FieldName::Outcome => &mut self.outcome,
            FieldName::Routine => &mut self.routine,
            FieldName::Condition => &mut self.condition,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_wire_names() {
        let names: Vec<_> = FieldName::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            vec!["name", "email", "skinType", "concern", "outcome", "routine", "condition"]
        );
        assert_eq!(FieldName::SkinType.to_string(), "skinType");
    }

    #[test]
    fn test_set_and_get_by_field() {
        let mut submission = Submission::default();
        assert!(submission.is_empty());

        submission.set(FieldName::SkinType, "oily");
        submission.set(FieldName::Condition, "pregnant");

        assert_eq!(submission.skin_type, "oily");
        assert_eq!(submission.get(FieldName::SkinType), "oily");
        assert_eq!(submission.get(FieldName::Condition), "pregnant");
        assert_eq!(submission.get(FieldName::Name), "");
        assert!(!submission.is_empty());
    }
}
