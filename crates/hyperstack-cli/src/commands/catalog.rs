//! Catalog requests: flavors, images and GPU stock.

use hyperstack::Request;

/// `GET /core/flavors`
#[must_use]
pub fn flavors() -> Request {
    Request::get("/core/flavors")
}

/// `GET /core/images`
#[must_use]
pub fn images() -> Request {
    Request::get("/core/images")
}

/// `GET /core/stocks`
#[must_use]
pub fn gpu_stocks() -> Request {
    Request::get("/core/stocks")
}
