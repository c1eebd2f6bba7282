//! Host of the statistics view-model.
//!
//! [`StatsScreen`] plays the part a UI page plays for its view-model: it binds
//! to the observable fields when created, asks the view-model to load each time
//! it is resumed, and renders whatever state the view-model settles on.
//!
//! ```text
//! create()  -> subscribe to empty / error / counts / loading
//! resume()  -> view_model.start()
//! render()  -> wait for the load, print statistics
//! destroy() -> unsubscribe
//! ```

use super::config::StatsConfig;
use super::messages::Message;
use super::observable::{ObservableField, SubscriptionId};
use super::statistics::PresentationState;
use super::view::View;
use super::view_model::StatsViewModel;
use crate::{msg_debug, msg_info};
use std::fmt::Display;
use std::sync::Arc;

struct Bindings {
    empty: SubscriptionId,
    error: SubscriptionId,
    active_tasks: SubscriptionId,
    completed_tasks: SubscriptionId,
    data_loading: SubscriptionId,
}

/// Statistics page bound to one [`StatsViewModel`].
///
/// Dropping the screen releases its subscriptions.
pub struct StatsScreen {
    view_model: Arc<StatsViewModel>,
    config: StatsConfig,
    bindings: Option<Bindings>,
}

impl StatsScreen {
    pub fn new(view_model: Arc<StatsViewModel>, config: StatsConfig) -> Self {
        StatsScreen {
            view_model,
            config,
            bindings: None,
        }
    }

    pub fn view_model(&self) -> &Arc<StatsViewModel> {
        &self.view_model
    }

    pub fn is_bound(&self) -> bool {
        self.bindings.is_some()
    }

    /// Binds the screen to the view-model. Calling it twice binds once.
    pub fn create(&mut self) {
        if self.bindings.is_some() {
            return;
        }

        let vm = &self.view_model;
        self.bindings = Some(Bindings {
            empty: bind(&vm.empty, "empty"),
            error: bind(&vm.error, "error"),
            active_tasks: bind(&vm.active_tasks, "active_tasks"),
            completed_tasks: bind(&vm.completed_tasks, "completed_tasks"),
            data_loading: bind(&vm.data_loading, "data_loading"),
        });
    }

    /// Activation hook: triggers one statistics load.
    pub fn resume(&self) {
        self.view_model.start();
    }

    /// Waits for the pending load and prints the result.
    pub async fn render(&self) -> PresentationState {
        if self.view_model.data_loading.get() {
            msg_info!(Message::StatisticsLoading);
        }
        let state = self.view_model.settled().await;
        View::statistics(&state, &self.config);
        state
    }

    pub fn destroy(&mut self) {
        if let Some(bindings) = self.bindings.take() {
            let vm = &self.view_model;
            vm.empty.unsubscribe(bindings.empty);
            vm.error.unsubscribe(bindings.error);
            vm.active_tasks.unsubscribe(bindings.active_tasks);
            vm.completed_tasks.unsubscribe(bindings.completed_tasks);
            vm.data_loading.unsubscribe(bindings.data_loading);
        }
    }
}

impl Drop for StatsScreen {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn bind<T>(field: &ObservableField<T>, name: &'static str) -> SubscriptionId
where
    T: Clone + PartialEq + Display + Send + Sync + 'static,
{
    field.subscribe(move |value| {
        msg_debug!(Message::StatisticsChanged {
            field: name,
            value: value.to_string(),
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::source::InMemoryTaskSource;
    use crate::libs::task::Task;

    fn screen(tasks: Vec<Task>) -> StatsScreen {
        let view_model = StatsViewModel::new(Arc::new(InMemoryTaskSource::new(tasks)));
        StatsScreen::new(view_model, StatsConfig::default())
    }

    #[test]
    fn create_and_destroy_manage_subscriptions() {
        let mut screen = screen(vec![]);
        screen.create();
        screen.create();
        assert!(screen.is_bound());
        assert_eq!(screen.view_model().empty.listener_count(), 1);
        assert_eq!(screen.view_model().data_loading.listener_count(), 1);

        screen.destroy();
        assert!(!screen.is_bound());
        assert_eq!(screen.view_model().empty.listener_count(), 0);
    }

    #[tokio::test]
    async fn resume_loads_statistics() {
        let mut screen = screen(vec![Task::new("Title1", "Description1")]);
        screen.create();
        screen.resume();

        let state = screen.render().await;
        assert!(!state.empty);
        assert!(!state.error);
        assert_eq!(state.statistics.active, 1);
    }
}
