//! Mock implementations of share ports for testing.

use mockall::mock;
use ow_core::ports::{ContentResolverPort, ShareHandlerPort};
use ow_core::{MimeType, NormalizedShare, RawLocator};
use std::sync::Mutex;

mock! {
    pub ContentResolver {}

    impl ContentResolverPort for ContentResolver {
        fn type_of(&self, locator: &RawLocator) -> anyhow::Result<Option<MimeType>>;
        fn real_path_of(&self, locator: &RawLocator) -> anyhow::Result<Option<String>>;
    }
}

mock! {
    pub ShareHandler {}

    impl ShareHandlerPort for ShareHandler {
        fn deliver(&self, share: NormalizedShare) -> anyhow::Result<()>;
    }
}

/// Resolver that answers every locator with `image/png` and a cache path
/// derived from the last locator segment.
pub fn png_resolver() -> MockContentResolver {
    let mut resolver = MockContentResolver::new();
    resolver
        .expect_type_of()
        .returning(|_| Ok(Some(MimeType::from("image/png"))));
    resolver.expect_real_path_of().returning(|locator| {
        let name = locator.to_string();
        let name = name.rsplit('/').next().unwrap_or_default();
        Ok(Some(format!("/cache/{name}.png")))
    });
    resolver
}

/// Handler that records deliveries and fails once `fail_at` shares were accepted.
#[derive(Default)]
pub struct RecordingHandler {
    pub delivered: Mutex<Vec<NormalizedShare>>,
    pub fail_at: Mutex<Option<usize>>,
}

impl RecordingHandler {
    pub fn failing_at(count: usize) -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            fail_at: Mutex::new(Some(count)),
        }
    }

    pub fn actions(&self) -> Vec<String> {
        self.delivered
            .lock()
            .unwrap()
            .iter()
            .map(|share| share.action.clone())
            .collect()
    }

    pub fn heal(&self) {
        *self.fail_at.lock().unwrap() = None;
    }
}

impl ShareHandlerPort for RecordingHandler {
    fn deliver(&self, share: NormalizedShare) -> anyhow::Result<()> {
        let mut delivered = self.delivered.lock().unwrap();
        if *self.fail_at.lock().unwrap() == Some(delivered.len()) {
            anyhow::bail!("handler unavailable");
        }
        delivered.push(share);
        Ok(())
    }
}
