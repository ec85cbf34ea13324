use super::{post_card::PostCard, pull_to_refresh::PullToRefresh};
use crate::feed::{FEED_STORAGE_KEY, Feed, FeedAction};
use crate::refresh::RefreshHandler;
use crate::util::sleep_ms;
use yew::prelude::*;

/// Simulated network latency of a refresh.
const FAKE_FETCH_MS: i32 = 2000;

#[function_component(App)]
pub fn app() -> Html {
    let feed = use_reducer(Feed::seeded);

    // Load persisted feed
    {
        let feed = feed.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(FEED_STORAGE_KEY) {
                        if let Some(stored) = Feed::from_json(&raw) {
                            feed.dispatch(FeedAction::Restore(stored));
                        }
                    }
                }
            }
            || ()
        });
    }
    // Persist after every refresh
    {
        let feed = feed.clone();
        use_effect_with(feed.refresh_count, move |_| {
            if feed.should_persist() {
                if let Some(win) = web_sys::window() {
                    if let Ok(Some(store)) = win.local_storage() {
                        if let Some(raw) = feed.to_json() {
                            let _ = store.set_item(FEED_STORAGE_KEY, &raw);
                        }
                    }
                }
            }
            || ()
        });
    }

    // Memoized so the component sees the same handler across renders
    let on_refresh = {
        let feed = feed.clone();
        use_memo((), move |_| {
            RefreshHandler::new(move || {
                let feed = feed.clone();
                async move {
                    sleep_ms(FAKE_FETCH_MS).await?;
                    let likes = 10 + (js_sys::Math::random() * 50.0).floor() as u32;
                    feed.dispatch(FeedAction::Refreshed {
                        id: js_sys::Date::now() as u64,
                        likes,
                    });
                    Ok(())
                }
            })
        })
    };

    html! {
        <PullToRefresh on_refresh={(*on_refresh).clone()}>
            <div style="max-width:600px; margin:0 auto; background:#f6f8fa; min-height:100vh; font-family:system-ui, sans-serif; color:#1f2328;">
                <header style="position:sticky; top:0; z-index:10; background:#ffffff; border-bottom:1px solid #eaeef2; padding:14px 16px;">
                    <div style="display:flex; justify-content:space-between; align-items:center;">
                        <h1 style="margin:0; font-size:20px;">{"Social Feed"}</h1>
                        <span style="font-size:13px; color:#57606a; font-variant-numeric:tabular-nums;">
                            { format!("Refreshes: {}", feed.refresh_count) }
                        </span>
                    </div>
                    <div style="margin-top:6px; font-size:12px; color:#8c959f;">
                        <span>{"👆 Pull down to refresh"}</span>
                    </div>
                </header>

                <main style="padding:16px;">
                    { for feed.posts.iter().map(|post| html! { <PostCard key={post.id} post={post.clone()} /> }) }
                </main>

                <footer style="padding:24px 16px; text-align:center; font-size:13px; color:#8c959f;">
                    <p style="margin:0;">{"End of feed • Pull to refresh for new content"}</p>
                </footer>
            </div>
        </PullToRefresh>
    }
}
