//! Diesel schema for category persistence.

diesel::table! {
    /// Category records.
    categories (id) {
        /// Category identifier.
        id -> Uuid,
        /// Unique category name.
        #[max_length = 100]
        name -> Varchar,
        /// Display colour in `#RRGGBB` form.
        #[max_length = 7]
        color -> Varchar,
        /// Optional icon label.
        #[max_length = 50]
        icon -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
