// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod projects_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod calendar_month_model;
        pub(crate) mod flag_model;
        pub(crate) mod project_model;
        pub(crate) mod quantity_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod calendar_month;
        pub(crate) mod position;
        pub(crate) mod project;
        pub(crate) mod record_store;
        pub(crate) mod timeline;
    }
    pub(crate) mod logic {
        pub(crate) mod calendar_month_impl;
        pub(crate) mod range_editing;
        pub(crate) mod record_store_impl;
        pub(crate) mod timeline_processor;
        mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod persistence_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod calendar_month_fmt;
    pub(crate) mod timeline_csv_exporter;
    pub(crate) mod timeline_table_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::calendar_month::*;
        pub use crate::domain::entities::position::*;
        pub use crate::domain::entities::project::*;
        pub use crate::domain::entities::record_store::*;
        pub use crate::domain::entities::timeline::*;
    }

    /// JSON-compatible conversion of whole project lists.
    pub mod codec {
        pub use crate::data::datasources::projects_json_datasource::{deserialize, serialize};
    }
}
