pub mod booking_form;
pub mod booking_list;
pub mod notification_modal;
pub mod resource_list;

pub use booking_form::{BookingForm, Field, FormData, FormMode};
pub use booking_list::{BookingList, BookingRow, RowAction};
pub use notification_modal::{NotificationModal, NotificationRow};
pub use resource_list::ResourceList;
