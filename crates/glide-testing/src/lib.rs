//! Testing utilities and harness for Glide

pub mod robot;
pub mod robot_assertions;
pub mod testing;

pub use robot::*;
pub use testing::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use crate::testing::*;
}
