use crate::models::booking::BookingStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Warning,
    Success,
    Info,
    Neutral,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub color: StatusColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Edit,
    CheckIn,
    Cancel,
    CheckOut,
    Invoice,
}

pub struct StatusService;

impl StatusService {
    /// The one status-to-display mapping. Every list and dialog that shows a
    /// booking status goes through here.
    pub fn resolve(status: BookingStatus) -> StatusDisplay {
        match status {
            BookingStatus::Pending => StatusDisplay {
                label: "Chờ xác nhận",
                color: StatusColor::Warning,
            },
            BookingStatus::Confirmed => StatusDisplay {
                label: "Đã xác nhận",
                color: StatusColor::Success,
            },
            BookingStatus::CheckedIn => StatusDisplay {
                label: "Đã nhận phòng",
                color: StatusColor::Info,
            },
            BookingStatus::CheckedOut => StatusDisplay {
                label: "Đã trả phòng",
                color: StatusColor::Neutral,
            },
            BookingStatus::Cancelled => StatusDisplay {
                label: "Đã hủy",
                color: StatusColor::Error,
            },
            BookingStatus::Unknown => StatusDisplay {
                label: "Không xác định",
                color: StatusColor::Neutral,
            },
        }
    }

    pub fn resolve_raw(raw: &str) -> StatusDisplay {
        Self::resolve(BookingStatus::parse(raw))
    }

    /// Permitted actions per canonical status. Checked-out and cancelled
    /// bookings only ever get read-only views; an unrecognized status gets
    /// nothing at all.
    pub fn allowed_actions(status: BookingStatus) -> &'static [BookingAction] {
        match status {
            BookingStatus::Pending | BookingStatus::Confirmed => &[
                BookingAction::Edit,
                BookingAction::CheckIn,
                BookingAction::Cancel,
            ],
            BookingStatus::CheckedIn => &[BookingAction::CheckOut],
            BookingStatus::CheckedOut => &[BookingAction::Invoice],
            BookingStatus::Cancelled | BookingStatus::Unknown => &[],
        }
    }

    pub fn can(status: BookingStatus, action: BookingAction) -> bool {
        Self::allowed_actions(status).contains(&action)
    }
}
