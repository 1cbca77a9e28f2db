#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/appraisal/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod category;
pub mod encoder;
pub mod error;
pub mod record;
pub mod registry;

pub use category::{Categorical, District, HeatingType, OccupancyStatus};
pub use encoder::{
    Alignment, EncodedVector, FeatureContract, OneHotRow, column_universe, encode, one_hot_row,
    reindex,
};
pub use error::{RecordError, Result};
pub use record::PropertyRecord;
pub use registry::{FieldInfo, FieldKind, available_fields, get_field_info};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
