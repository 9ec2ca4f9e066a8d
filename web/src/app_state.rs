// Copyright 2026 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use menu::{MenuState, Message};
use sycamore::prelude::*;
use sycamore_state::{Handler, MessageMapper};
use tracing::{debug, instrument};

pub struct StateMachine;

impl MessageMapper<Message, MenuState> for StateMachine {
    #[instrument(skip_all, fields(?msg))]
    fn map<'ctx>(&self, _cx: Scope<'ctx>, msg: Message, original: &'ctx Signal<MenuState>) {
        let original_copy = original.get().as_ref().clone();
        let updated = original_copy.apply(msg);
        debug!(
            query = %updated.search_query,
            show_favorites = updated.show_favorites,
            "state updated"
        );
        original.set(updated);
    }
}

pub type StateHandler<'ctx> = &'ctx Handler<'ctx, StateMachine, MenuState, Message>;

pub fn get_state_handler<'ctx>(cx: Scope<'ctx>, initial: MenuState) -> StateHandler<'ctx> {
    Handler::new(cx, initial, StateMachine)
}
