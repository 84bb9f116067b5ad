// Common test utilities and fixtures

pub mod helpers;

#[allow(unused_imports)]
pub use fixtures::{document, TestCorpus};
#[allow(unused_imports)]
pub use helpers::{create_test_services, import_corpus, store_document};
