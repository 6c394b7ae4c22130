mod common;
pub use self::common::Query;

mod access_module;
pub use self::access_module::AccessModuleQuery;
