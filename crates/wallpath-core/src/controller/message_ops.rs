//! Message queue operations for the Controller.

use super::Controller;
use crate::{
    error::Result,
    models::QueuedMessage,
    params::{ListMessages, ProcessMessages, PublishMessage},
};

impl Controller {
    /// Queues a message, delivering it at once when its priority is high.
    pub async fn publish(&self, params: &PublishMessage) -> Result<QueuedMessage> {
        let params = params.clone();
        self.with_database(move |db, broker| {
            broker.publish(db, &params.topic, &params.message, params.priority)
        })
        .await
    }

    /// Delivers pending messages and returns how many were handled.
    pub async fn process_messages(&self, params: &ProcessMessages) -> Result<usize> {
        let topic = params.topic.clone();
        self.with_database(move |db, broker| broker.process(db, topic.as_deref()))
            .await
    }

    /// Messages of one topic, newest first.
    pub async fn list_messages(&self, params: &ListMessages) -> Result<Vec<QueuedMessage>> {
        let params = params.clone();
        self.with_database(move |db, _| db.list_messages(&params.topic, params.limit))
            .await
    }
}
