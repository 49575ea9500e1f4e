mod post;
pub use self::post::{NewPost, Post};
