//! Domain layer - merge engine, derived values and editing sessions

pub mod catalog;
pub mod clock;
pub mod events;
pub mod merge;
pub mod preview;
pub mod quiet_hours;
pub mod session;
pub mod ticker;
pub mod validation;

pub use catalog::{OptionCatalog, StaticOptionCatalog};
pub use clock::{Clock, SystemClock};
pub use events::{CallbackSink, ChangeSink, NoOpChangeSink, PreferencesChange, PreferencesChangedEvent};
pub use preview::PreviewFormatter;
pub use quiet_hours::QuietHours;
pub use session::{EditingSession, GeneralPreferences, NotificationPreferences};
pub use ticker::PreviewHandle;
