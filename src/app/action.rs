/// Side effects the event loop performs on behalf of the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Bell,
}
