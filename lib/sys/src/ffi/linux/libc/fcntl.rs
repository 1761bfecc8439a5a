pub use ::libc::{
    flock as Flock,
    F_GETLK,
    F_SETLK,
    F_SETLKW,
};
