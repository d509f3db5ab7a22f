pub mod class_file;
pub mod method;
pub mod query_object;

pub use class_file::ClassFile;
pub use method::{MethodParam, MethodSpec};
pub use query_object::{QueryObjectBuilder, ROOT_QUERY_OBJECT_NAME};
