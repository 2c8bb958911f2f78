//! Record types managed by the admin application, each with a declared
//! field set used by the diff engine.

pub mod email_template;
pub mod metadata;
pub mod promo_code;
pub mod schema;
pub mod ticket;

pub use email_template::{EmailTemplateForm, WhenFrom};
pub use metadata::{render_metadata, Metadata};
pub use promo_code::{DiscountType, PromoCodeForm};
pub use schema::{Entity, EntityKind, EntitySchema, Nullable};
pub use ticket::{TicketForm, TicketType};
