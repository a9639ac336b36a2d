//! Shared feed feature used by the integration tests: a posts list with
//! initial load, pull-to-refresh, and optimistic likes.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use uniflow::{EffectStream, Intent, Reducer, StateHolder, Store, UiEffect, UiState};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub liked: bool,
    pub like_count: u32,
}

impl Post {
    pub fn new(id: &str, liked: bool, like_count: u32) -> Self {
        Self {
            id: id.to_string(),
            liked,
            like_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FeedState {
    #[default]
    Loading,
    Success {
        posts: Vec<Post>,
        is_refreshing: bool,
    },
    Error {
        message: String,
    },
}

impl UiState for FeedState {}

impl FeedState {
    pub fn success(posts: Vec<Post>) -> Self {
        FeedState::Success {
            posts,
            is_refreshing: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum FeedIntent {
    /// User opened the feed.
    Load,
    /// User pulled to refresh.
    Refresh,
    /// User tapped the like button on a post.
    ToggleLike { post_id: String },
    /// A fetch finished successfully.
    PostsLoaded { posts: Vec<Post> },
    /// The initial fetch failed.
    LoadFailed { message: String },
    /// A refresh fetch failed; current posts stay on screen.
    RefreshFailed,
}

impl Intent for FeedIntent {}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedEffect {
    LikeFailed { post_id: String },
    RefreshFailed,
}

impl UiEffect for FeedEffect {}

pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Fetching is a side effect; the state does not change until
            // a result intent arrives
            FeedIntent::Load => state,

            FeedIntent::Refresh => match state {
                FeedState::Success { posts, .. } => FeedState::Success {
                    posts,
                    is_refreshing: true,
                },
                other => other,
            },

            FeedIntent::ToggleLike { post_id } => match state {
                FeedState::Success {
                    mut posts,
                    is_refreshing,
                } => {
                    if let Some(post) = posts.iter_mut().find(|post| post.id == post_id) {
                        if post.liked {
                            post.liked = false;
                            post.like_count = post.like_count.saturating_sub(1);
                        } else {
                            post.liked = true;
                            post.like_count += 1;
                        }
                    }
                    FeedState::Success {
                        posts,
                        is_refreshing,
                    }
                }
                other => other,
            },

            FeedIntent::PostsLoaded { posts } => FeedState::Success {
                posts,
                is_refreshing: false,
            },

            FeedIntent::LoadFailed { message } => FeedState::Error { message },

            FeedIntent::RefreshFailed => match state {
                FeedState::Success { posts, .. } => FeedState::Success {
                    posts,
                    is_refreshing: false,
                },
                other => other,
            },
        }
    }
}

#[derive(Debug, Error)]
#[error("network unreachable")]
pub struct GatewayError;

/// Fake posts backend with scriptable failures and latency.
pub struct FakeGateway {
    posts: Vec<Post>,
    pub fail_fetch: AtomicBool,
    pub fail_like: AtomicBool,
    latency: Duration,
}

impl FakeGateway {
    pub fn new(posts: Vec<Post>) -> Arc<Self> {
        Arc::new(Self {
            posts,
            fail_fetch: AtomicBool::new(false),
            fail_like: AtomicBool::new(false),
            latency: Duration::from_millis(30),
        })
    }

    pub async fn fetch_posts(&self) -> Result<Vec<Post>, GatewayError> {
        tokio::time::sleep(self.latency).await;
        if self.fail_fetch.load(Ordering::SeqCst) {
            Err(GatewayError)
        } else {
            Ok(self.posts.clone())
        }
    }

    pub async fn set_liked(&self, _post_id: &str, _liked: bool) -> Result<(), GatewayError> {
        tokio::time::sleep(self.latency).await;
        if self.fail_like.load(Ordering::SeqCst) {
            Err(GatewayError)
        } else {
            Ok(())
        }
    }
}

/// Feed feature holder: initial load, pull-to-refresh, optimistic likes.
pub struct FeedHolder {
    store: Store<FeedState, FeedEffect>,
    gateway: Arc<FakeGateway>,
}

impl FeedHolder {
    pub fn new(
        initial: FeedState,
        gateway: Arc<FakeGateway>,
    ) -> (Self, EffectStream<FeedEffect>) {
        let (store, effects) = Store::<FeedState, FeedEffect>::builder()
            .name("feed")
            .build(initial);
        (Self { store, gateway }, effects)
    }
}

impl StateHolder for FeedHolder {
    type State = FeedState;
    type Intent = FeedIntent;
    type Effect = FeedEffect;

    fn store(&self) -> &Store<FeedState, FeedEffect> {
        &self.store
    }

    fn dispatch(&self, intent: FeedIntent) {
        match intent {
            FeedIntent::Load => {
                let store = self.store.clone();
                let gateway = Arc::clone(&self.gateway);
                self.store.spawn(async move {
                    match gateway.fetch_posts().await {
                        Ok(posts) => {
                            store.reduce::<FeedReducer>(FeedIntent::PostsLoaded { posts });
                        }
                        Err(err) => {
                            store.reduce::<FeedReducer>(FeedIntent::LoadFailed {
                                message: err.to_string(),
                            });
                        }
                    }
                });
            }

            FeedIntent::Refresh => {
                self.store.reduce::<FeedReducer>(FeedIntent::Refresh);
                let store = self.store.clone();
                let gateway = Arc::clone(&self.gateway);
                self.store.spawn(async move {
                    match gateway.fetch_posts().await {
                        Ok(posts) => {
                            store.reduce::<FeedReducer>(FeedIntent::PostsLoaded { posts });
                        }
                        Err(_) => {
                            store.reduce::<FeedReducer>(FeedIntent::RefreshFailed);
                            let _ = store.emit(FeedEffect::RefreshFailed).await;
                        }
                    }
                });
            }

            FeedIntent::ToggleLike { post_id } => {
                // Optimistic flip; rolled back below if the backend rejects it
                self.store.reduce::<FeedReducer>(FeedIntent::ToggleLike {
                    post_id: post_id.clone(),
                });
                let desired = match self.store.state() {
                    FeedState::Success { posts, .. } => posts
                        .iter()
                        .find(|post| post.id == post_id)
                        .map(|post| post.liked),
                    _ => None,
                };
                let Some(desired) = desired else {
                    // Intent did not apply to the current state
                    return;
                };
                let store = self.store.clone();
                let gateway = Arc::clone(&self.gateway);
                self.store.spawn(async move {
                    if gateway.set_liked(&post_id, desired).await.is_err() {
                        store.reduce::<FeedReducer>(FeedIntent::ToggleLike {
                            post_id: post_id.clone(),
                        });
                        let _ = store.emit(FeedEffect::LikeFailed { post_id }).await;
                    }
                });
            }

            // Result intents arriving from outside go straight through
            // the reducer
            other => self.store.reduce::<FeedReducer>(other),
        }
    }
}
