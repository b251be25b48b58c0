pub mod error;
pub mod merge;
pub mod registry;
pub mod summary;
pub mod types;

pub use error::SessionError;
pub use merge::{merge_into_new_context, merge_with_context, merge_with_context_at};
pub use registry::SessionRegistry;
pub use summary::{CompletenessAssessment, MedicalContext};
pub use types::{
    ConversationTurn, MedicineOrder, OrderedTest, PrescribedMedicine, SessionContext,
    SymptomRecord, TimelineEntry, UserInfo,
};
