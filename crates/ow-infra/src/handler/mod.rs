mod channel;

pub use channel::ChannelShareHandler;
