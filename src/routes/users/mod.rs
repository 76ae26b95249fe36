pub mod detail;
pub mod list;

pub use detail::UserDetail;
pub use list::UserList;
