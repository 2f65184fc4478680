pub mod arn;
pub mod configure;
pub mod explore;

pub use arn::ArnCommand;
pub use configure::ConfigureCommand;
pub use explore::ExploreCommand;
