//! Data models exchanged with the HZS library API

pub mod auth;
pub mod author;
pub mod book;
pub mod customer;
pub mod event;
pub mod invoice;
pub mod rental;
pub mod room;
pub mod sponsor;
pub mod timestamp;

// Re-export commonly used types
pub use auth::{LoginResponse, Role, TokenClaims};
pub use author::{Author, AuthorCreate};
pub use book::{Book, BookCopy, BookCopyCreate, BookCreate, CopyStatus};
pub use customer::{Customer, CustomerCreate};
pub use event::{Exhibition, Invitation, Registration, Seminar};
pub use invoice::{Invoice, Payment, PaymentCreate};
pub use rental::{Rental, RentalCreate};
pub use room::{Room, RoomReservation};
