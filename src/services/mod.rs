//! Room services: join handshake, message fan-out, departure.

pub mod room;
