//! NexusPHP dialect tests

mod export;
