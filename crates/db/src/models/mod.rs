pub mod subscription;
pub mod template;
