use tracing::{debug, info_span};

use super::resolve_share_item::ResolveShareItemUseCase;
use ow_core::ports::ShareEventSource;
use ow_core::share::extra_keys;
use ow_core::{ActionTable, NormalizedShare, PayloadSource, RawLocator, ShareError};

/// Runtime settings of the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerSettings {
    /// Whether the platform delivers multi-item payloads at all.
    pub multi_item_payloads: bool,
    pub actions: ActionTable,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            multi_item_payloads: true,
            actions: ActionTable::new(),
        }
    }
}

/// Normalize one share event into a [`NormalizedShare`].
///
/// # Source precedence
/// multi-item payload > stream locator > data locator. Exactly one source is
/// read and sources are never merged. Precedence is decided on structural
/// presence: a multi-item payload that is present but empty still wins, and
/// the event then yields no result.
///
/// # Returns
/// - `Ok(None)` when no source is present or no item could be built
/// - `Err(ShareError::MalformedEvent)` when a candidate locator is malformed;
///   the content resolver is not called in that case
pub struct NormalizeShareEventUseCase {
    item_resolver: ResolveShareItemUseCase,
    settings: NormalizerSettings,
}

impl NormalizeShareEventUseCase {
    pub fn new(item_resolver: ResolveShareItemUseCase, settings: NormalizerSettings) -> Self {
        Self {
            item_resolver,
            settings,
        }
    }

    pub fn execute(
        &self,
        event: &dyn ShareEventSource,
    ) -> Result<Option<NormalizedShare>, ShareError> {
        let span = info_span!(
            "usecase.normalize_share_event.execute",
            action = event.action().unwrap_or_default(),
        );
        let _guard = span.enter();

        let Some((source, candidates)) = self.select_candidates(event) else {
            debug!("No payload source present, nothing to report");
            return Ok(None);
        };

        debug!(source = %source, candidates = candidates.len(), "Selected payload source");

        let locators = candidates
            .into_iter()
            .map(|raw| raw.map(parse_locator).transpose())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ShareError::MalformedEvent(format!("{source} payload: {err}")))?;

        let mut items = Vec::with_capacity(locators.len());
        for locator in &locators {
            if let Some(item) = self.item_resolver.execute(locator.as_ref())? {
                items.push(item);
            }
        }

        if items.is_empty() {
            debug!(source = %source, "Payload source produced no items, nothing to report");
            return Ok(None);
        }

        let share = NormalizedShare {
            action: self.settings.actions.translate(event.action()),
            exit_after_handling: event.bool_extra(extra_keys::EXIT_ON_SENT).unwrap_or(false),
            items,
        };

        debug!(
            action = %share.action,
            exit = share.exit_after_handling,
            items = share.item_count(),
            without_path = share.items.iter().filter(|item| !item.has_path()).count(),
            "Share event normalized"
        );

        Ok(Some(share))
    }

    fn select_candidates<'a>(
        &self,
        event: &'a dyn ShareEventSource,
    ) -> Option<(PayloadSource, Vec<Option<&'a str>>)> {
        if self.settings.multi_item_payloads {
            if let Some(clip_items) = event.clip_items() {
                return Some((
                    PayloadSource::ClipData,
                    clip_items.iter().map(Option::as_deref).collect(),
                ));
            }
        }

        if let Some(stream) = event.stream_locator() {
            return Some((PayloadSource::Stream, vec![Some(stream)]));
        }

        event
            .data_locator()
            .map(|data| (PayloadSource::Data, vec![Some(data)]))
    }
}

/// Parse a wire locator and make sure it renders canonically.
fn parse_locator(raw: &str) -> Result<RawLocator, ShareError> {
    let locator = RawLocator::parse(raw)?;
    locator.canonical()?;
    Ok(locator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{png_resolver, MockContentResolver};
    use ow_core::{MimeType, ResolvedItem, ShareEvent};
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn normalizer_with(resolver: MockContentResolver) -> NormalizeShareEventUseCase {
        NormalizeShareEventUseCase::new(
            ResolveShareItemUseCase::new(Arc::new(resolver)),
            NormalizerSettings::default(),
        )
    }

    fn uri(raw: &str) -> String {
        raw.to_string()
    }

    #[test]
    fn test_end_to_end_stream_share() {
        let mut resolver = MockContentResolver::new();
        resolver
            .expect_type_of()
            .withf(|locator| locator == &RawLocator::uri("content://media/1"))
            .returning(|_| Ok(Some(MimeType::from("image/png"))));
        resolver
            .expect_real_path_of()
            .returning(|_| Ok(Some("/cache/1.png".to_string())));
        let event = ShareEvent::new("android.intent.action.SEND")
            .with_stream(uri("content://media/1"))
            .with_extra(extra_keys::EXIT_ON_SENT, json!(true));

        let share = normalizer_with(resolver).execute(&event).unwrap().unwrap();

        assert_eq!(
            share,
            NormalizedShare {
                action: "SEND".to_string(),
                exit_after_handling: true,
                items: vec![ResolvedItem {
                    mime_type: Some(MimeType::from("image/png")),
                    uri: "content://media/1".to_string(),
                    path: "/cache/1.png".to_string(),
                }],
            }
        );
    }

    #[test]
    fn test_clip_items_win_over_stream_and_data() {
        let event = ShareEvent::new("android.intent.action.SEND_MULTIPLE")
            .with_clip_items(vec![
                Some(uri("content://media/3")),
                Some(uri("content://media/1")),
                Some(uri("content://media/2")),
            ])
            .with_stream(uri("content://media/9"))
            .with_data(uri("content://media/8"));

        let share = normalizer_with(png_resolver())
            .execute(&event)
            .unwrap()
            .unwrap();

        let uris: Vec<_> = share.items.iter().map(|i| i.uri.as_str()).collect();
        assert_eq!(
            uris,
            vec!["content://media/3", "content://media/1", "content://media/2"]
        );
        assert_eq!(share.action, "SEND");
    }

    #[test]
    fn test_stream_used_without_clip_items() {
        let event = ShareEvent::new("android.intent.action.SEND")
            .with_stream(uri("content://media/5"))
            .with_data(uri("content://media/8"));

        let share = normalizer_with(png_resolver())
            .execute(&event)
            .unwrap()
            .unwrap();

        assert_eq!(share.item_count(), 1);
        assert_eq!(share.items[0].uri, "content://media/5");
    }

    #[test]
    fn test_data_used_as_last_resort() {
        let event =
            ShareEvent::new("android.intent.action.VIEW").with_data(uri("file:///sdcard/a.pdf"));

        let share = normalizer_with(png_resolver())
            .execute(&event)
            .unwrap()
            .unwrap();

        assert_eq!(share.action, "VIEW");
        assert_eq!(share.item_count(), 1);
        assert_eq!(share.items[0].uri, "file:///sdcard/a.pdf");
    }

    #[test]
    fn test_no_sources_yields_no_result() {
        let event = ShareEvent::new("android.intent.action.MAIN");

        let result = normalizer_with(MockContentResolver::new())
            .execute(&event)
            .unwrap();

        assert_eq!(result, None);
    }

    #[test]
    fn test_present_but_empty_clip_items_do_not_fall_through() {
        let event = ShareEvent::new("android.intent.action.SEND")
            .with_clip_items(vec![])
            .with_stream(uri("content://media/1"));

        // Any resolver call would panic: the stream must not be consulted.
        let result = normalizer_with(MockContentResolver::new())
            .execute(&event)
            .unwrap();

        assert_eq!(result, None);
    }

    #[test]
    fn test_clip_items_ignored_when_platform_lacks_support() {
        let event = ShareEvent::new("android.intent.action.SEND")
            .with_clip_items(vec![Some(uri("content://media/1"))])
            .with_stream(uri("content://media/2"));
        let uc = NormalizeShareEventUseCase::new(
            ResolveShareItemUseCase::new(Arc::new(png_resolver())),
            NormalizerSettings {
                multi_item_payloads: false,
                ..NormalizerSettings::default()
            },
        );

        let share = uc.execute(&event).unwrap().unwrap();

        assert_eq!(share.items[0].uri, "content://media/2");
    }

    #[test]
    fn test_null_clip_entries_are_skipped() {
        let event = ShareEvent::new("android.intent.action.SEND_MULTIPLE").with_clip_items(vec![
            Some(uri("content://media/1")),
            None,
            Some(uri("content://media/2")),
        ]);

        let share = normalizer_with(png_resolver())
            .execute(&event)
            .unwrap()
            .unwrap();

        assert_eq!(share.item_count(), 2);
        assert_eq!(share.items[1].uri, "content://media/2");
    }

    #[test]
    fn test_only_null_clip_entries_yield_no_result() {
        let event = ShareEvent::new("android.intent.action.SEND")
            .with_clip_items(vec![None, None])
            .with_stream(uri("content://media/1"));

        let result = normalizer_with(MockContentResolver::new())
            .execute(&event)
            .unwrap();

        assert_eq!(result, None);
    }

    #[test]
    fn test_unresolved_path_keeps_item() {
        let mut resolver = MockContentResolver::new();
        resolver.expect_type_of().returning(|_| Ok(None));
        resolver
            .expect_real_path_of()
            .returning(|_| Err(anyhow::anyhow!("column missing")));
        let event = ShareEvent::new("android.intent.action.SEND")
            .with_stream(uri("content://com.example.provider/opaque/1"));

        let share = normalizer_with(resolver).execute(&event).unwrap().unwrap();

        assert_eq!(share.items[0].path, "");
        assert_eq!(share.items[0].uri, "content://com.example.provider/opaque/1");
    }

    #[test]
    fn test_malformed_locator_aborts_before_any_lookup() {
        let event = ShareEvent::new("android.intent.action.SEND_MULTIPLE").with_clip_items(vec![
            Some(uri("content://media/1")),
            Some(uri("not/absolute")),
        ]);

        let result = normalizer_with(MockContentResolver::new()).execute(&event);

        assert!(matches!(result, Err(ShareError::MalformedEvent(_))));
    }

    #[test]
    fn test_malformed_locator_in_unselected_source_is_ignored() {
        let event = ShareEvent::from_value(json!({
            "action": "android.intent.action.SEND",
            "clip_items": ["content://media/1"],
            "stream": "",
            "data": "media/1"
        }))
        .unwrap();

        let share = normalizer_with(png_resolver())
            .execute(&event)
            .unwrap()
            .unwrap();

        assert_eq!(share.item_count(), 1);
        assert_eq!(share.items[0].uri, "content://media/1");
    }

    #[test]
    fn test_malformed_selected_stream_is_malformed_event() {
        let event = ShareEvent::new("android.intent.action.SEND").with_stream("media/1");

        let result = normalizer_with(MockContentResolver::new()).execute(&event);

        assert!(matches!(result, Err(ShareError::MalformedEvent(msg)) if msg.starts_with("stream")));
    }

    #[test]
    fn test_file_path_locators_render_as_file_urls() {
        let event = ShareEvent::new("android.intent.action.VIEW").with_data("/sdcard/My Files/a.pdf");

        let share = normalizer_with(png_resolver())
            .execute(&event)
            .unwrap()
            .unwrap();

        assert_eq!(share.items[0].uri, "file:///sdcard/My%20Files/a.pdf");
    }

    #[test]
    fn test_exit_flag_defaults() {
        let uc = normalizer_with(png_resolver());
        let base = ShareEvent::new("android.intent.action.SEND").with_stream(uri("content://m/1"));

        let absent = uc.execute(&base).unwrap().unwrap();
        let truthy = uc
            .execute(&base.clone().with_extra(extra_keys::EXIT_ON_SENT, json!(true)))
            .unwrap()
            .unwrap();
        let stringly = uc
            .execute(&base.clone().with_extra(extra_keys::EXIT_ON_SENT, json!("true")))
            .unwrap()
            .unwrap();

        assert!(!absent.exit_after_handling);
        assert!(truthy.exit_after_handling);
        assert!(!stringly.exit_after_handling);
    }

    #[test]
    fn test_custom_action_passes_through_and_config_rows_apply() {
        let mut extra = BTreeMap::new();
        extra.insert("com.example.SHARE_TEXT".to_string(), "SEND".to_string());
        let uc = NormalizeShareEventUseCase::new(
            ResolveShareItemUseCase::new(Arc::new(png_resolver())),
            NormalizerSettings {
                actions: ActionTable::with_extra(extra),
                ..NormalizerSettings::default()
            },
        );

        let custom = ShareEvent::new("com.example.CUSTOM").with_stream(uri("content://m/1"));
        let configured =
            ShareEvent::new("com.example.SHARE_TEXT").with_stream(uri("content://m/1"));

        assert_eq!(
            uc.execute(&custom).unwrap().unwrap().action,
            "com.example.CUSTOM"
        );
        assert_eq!(uc.execute(&configured).unwrap().unwrap().action, "SEND");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let uc = normalizer_with(png_resolver());
        let event = ShareEvent::new("android.intent.action.SEND_MULTIPLE")
            .with_clip_items(vec![Some(uri("content://media/1")), None])
            .with_extra(extra_keys::EXIT_ON_SENT, json!(true));

        assert_eq!(uc.execute(&event).unwrap(), uc.execute(&event).unwrap());
    }
}
