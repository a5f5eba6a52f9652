pub mod form_snapshot;
