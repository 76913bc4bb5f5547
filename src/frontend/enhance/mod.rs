mod cursor;
mod observe;
mod page;
mod pointer;
mod scroll;

use std::rc::Rc;

use super::dom::Subscriptions;
use crate::config::EffectsConfig;

pub fn install_all(config: &Rc<EffectsConfig>) -> Subscriptions {
    let mut subscriptions = Subscriptions::default();
    subscriptions.extend(page::install(config));
    subscriptions.extend(cursor::install(config));
    subscriptions.extend(pointer::install());
    subscriptions.extend(scroll::install());
    subscriptions.extend(observe::install());
    subscriptions
}
