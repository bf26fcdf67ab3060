mod about;
mod blog;
mod dashboard;
mod faqs;
mod home;
mod legal;
mod login;
mod pricing;
mod signup;
mod upload;

pub use crate::board::BoardView;

pub use about::About;
pub use blog::Blog;
pub use dashboard::Dashboard;
pub use faqs::Faqs;
pub use home::Home;
pub use legal::{Cookies, Privacy, Terms};
pub use login::Login;
pub use pricing::Pricing;
pub use signup::Signup;
pub use upload::Upload;
