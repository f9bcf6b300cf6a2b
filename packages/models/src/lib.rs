pub mod choices;
pub mod recommendation;
pub mod submission;

pub mod prelude {
    pub use crate::choices::{Concern, SkinType};
    pub use crate::recommendation::Recommendation;
    pub use crate::submission::{FieldName, Submission};
}
