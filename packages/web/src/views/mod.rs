mod layout;
pub use layout::SiteLayout;

mod home;
pub use home::Home;

mod plants;
pub use plants::Plants;

mod plant_detail;
pub use plant_detail::PlantDetail;

mod gardens;
pub use gardens::Gardens;

mod garden_detail;
pub use garden_detail::GardenDetail;

mod blog;
pub use blog::Blog;

mod edit_blog;
pub use edit_blog::EditBlog;

mod calendar;
pub use calendar::Calendar;

mod about;
pub use about::About;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod admin;
pub use admin::AdminDashboard;

mod not_found;
pub use not_found::NotFound;
