mod subscription_repo;
mod template_repo;

pub use subscription_repo::SubscriptionRepo;
pub use template_repo::TemplateRepo;
