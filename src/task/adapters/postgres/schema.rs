//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title. Length limits are enforced by validation.
        title -> Text,
        /// Optional description.
        description -> Nullable<Text>,
        /// Workflow status.
        #[max_length = 20]
        status -> Varchar,
        /// Priority level.
        #[max_length = 20]
        priority -> Varchar,
        /// Optional informational category link.
        category_id -> Nullable<Uuid>,
        /// Optional deadline.
        due_date -> Nullable<Timestamptz>,
        /// Completion timestamp.
        completed_at -> Nullable<Timestamptz>,
        /// Soft-delete flag.
        archived -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
