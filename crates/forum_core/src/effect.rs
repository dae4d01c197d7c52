use crate::NavigationAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate(NavigationAction),
}
