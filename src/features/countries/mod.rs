//! Country registry feature exposing ISO-3166 style country records.
//!
//! The registry is in-memory, seeded at startup, and enforces code uniqueness
//! plus last-record protection on every mutation.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/countries` | No | List country summaries |
//! | GET | `/api/countries/{id}` | No | Get country detail |
//! | POST | `/api/countries` | No | Create country |
//! | PUT | `/api/countries/{id}` | No | Update country |
//! | DELETE | `/api/countries/{id}` | No | Delete country |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CountryService;
