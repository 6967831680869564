//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Version ledger operations
//! take `&mut Transaction` instead so entity writes and their snapshots
//! commit atomically.

pub mod answer_repo;
pub mod answer_version_repo;
pub mod question_repo;
pub mod question_tag_repo;
pub mod question_version_repo;
pub mod search_repo;
pub mod tag_repo;
pub mod tutor_repo;

pub use answer_repo::AnswerRepo;
pub use answer_version_repo::AnswerVersionRepo;
pub use question_repo::QuestionRepo;
pub use question_tag_repo::QuestionTagRepo;
pub use question_version_repo::QuestionVersionRepo;
pub use search_repo::SearchRepo;
pub use tag_repo::TagRepo;
pub use tutor_repo::TutorRepo;
