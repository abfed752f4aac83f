pub mod person_queries;
