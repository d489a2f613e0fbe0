use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, DataKey, TooltipEventType, TooltipIndex, TooltipTrigger};

/// Latest axis-level hover and click.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisInteraction {
    active_mouse_over_axis_index: Option<TooltipIndex>,
    active_click_axis_index: Option<TooltipIndex>,
    active_mouse_over_axis_data_key: Option<DataKey>,
    active_click_axis_data_key: Option<DataKey>,
    active_mouse_over_axis_coordinate: Option<Coordinate>,
    active_click_axis_coordinate: Option<Coordinate>,
    has_been_active_previously: bool,
}

/// Latest item-level hover and click.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemInteraction {
    active_mouse_over_index: Option<TooltipIndex>,
    active_click_index: Option<TooltipIndex>,
    active_mouse_over_data_key: Option<DataKey>,
    active_click_data_key: Option<DataKey>,
    active_mouse_over_coordinate: Option<Coordinate>,
    active_click_coordinate: Option<Coordinate>,
    has_been_active_previously: bool,
}

/// Keyboard navigation state; overrides default indices while active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyboardInteraction {
    active: bool,
    index: Option<TooltipIndex>,
    coordinate: Option<Coordinate>,
    has_been_active_previously: bool,
}

/// Borrowed view of one `(event type, trigger)` channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionChannel<'a> {
    pub index: Option<&'a TooltipIndex>,
    pub data_key: Option<&'a DataKey>,
    pub coordinate: Option<Coordinate>,
}

/// A normalized input event. Each variant has exactly one application path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InteractionEvent {
    AxisHover {
        index: TooltipIndex,
        coordinate: Option<Coordinate>,
        data_key: Option<DataKey>,
    },
    AxisClick {
        index: TooltipIndex,
        coordinate: Option<Coordinate>,
        data_key: Option<DataKey>,
    },
    ItemHover {
        index: TooltipIndex,
        coordinate: Option<Coordinate>,
        data_key: Option<DataKey>,
    },
    ItemClick {
        index: TooltipIndex,
        coordinate: Option<Coordinate>,
        data_key: Option<DataKey>,
    },
    LeaveChart,
    LeaveItem,
    KeyboardFocus {
        index: TooltipIndex,
        coordinate: Option<Coordinate>,
    },
    KeyboardBlur,
}

/// Field-less tag of an [`InteractionEvent`], used in logs and plugin events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionEventKind {
    AxisHover,
    AxisClick,
    ItemHover,
    ItemClick,
    LeaveChart,
    LeaveItem,
    KeyboardFocus,
    KeyboardBlur,
}

impl InteractionEvent {
    #[must_use]
    pub fn kind(&self) -> InteractionEventKind {
        match self {
            Self::AxisHover { .. } => InteractionEventKind::AxisHover,
            Self::AxisClick { .. } => InteractionEventKind::AxisClick,
            Self::ItemHover { .. } => InteractionEventKind::ItemHover,
            Self::ItemClick { .. } => InteractionEventKind::ItemClick,
            Self::LeaveChart => InteractionEventKind::LeaveChart,
            Self::LeaveItem => InteractionEventKind::LeaveItem,
            Self::KeyboardFocus { .. } => InteractionEventKind::KeyboardFocus,
            Self::KeyboardBlur => InteractionEventKind::KeyboardBlur,
        }
    }
}

/// Interaction slice of the chart state.
///
/// Fields are written only through [`TooltipInteractionState::apply`]. Click
/// fields are never cleared once set; leave events clear hover indices and
/// data keys but keep the last hover coordinates. Each hover and keyboard
/// channel remembers whether it was ever used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipInteractionState {
    axis_interaction: AxisInteraction,
    item_interaction: ItemInteraction,
    keyboard_interaction: KeyboardInteraction,
}

impl TooltipInteractionState {
    #[must_use]
    pub fn axis(&self) -> &AxisInteraction {
        &self.axis_interaction
    }

    #[must_use]
    pub fn item(&self) -> &ItemInteraction {
        &self.item_interaction
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardInteraction {
        &self.keyboard_interaction
    }

    #[must_use]
    pub fn channel(
        &self,
        event_type: TooltipEventType,
        trigger: TooltipTrigger,
    ) -> InteractionChannel<'_> {
        let axis = &self.axis_interaction;
        let item = &self.item_interaction;
        match (event_type, trigger) {
            (TooltipEventType::Axis, TooltipTrigger::Hover) => InteractionChannel {
                index: axis.active_mouse_over_axis_index.as_ref(),
                data_key: axis.active_mouse_over_axis_data_key.as_ref(),
                coordinate: axis.active_mouse_over_axis_coordinate,
            },
            (TooltipEventType::Axis, TooltipTrigger::Click) => InteractionChannel {
                index: axis.active_click_axis_index.as_ref(),
                data_key: axis.active_click_axis_data_key.as_ref(),
                coordinate: axis.active_click_axis_coordinate,
            },
            (TooltipEventType::Item, TooltipTrigger::Hover) => InteractionChannel {
                index: item.active_mouse_over_index.as_ref(),
                data_key: item.active_mouse_over_data_key.as_ref(),
                coordinate: item.active_mouse_over_coordinate,
            },
            (TooltipEventType::Item, TooltipTrigger::Click) => InteractionChannel {
                index: item.active_click_index.as_ref(),
                data_key: item.active_click_data_key.as_ref(),
                coordinate: item.active_click_coordinate,
            },
        }
    }

    /// Applies one event. This is the only writer of interaction fields.
    pub fn apply(&mut self, event: &InteractionEvent) {
        match event {
            InteractionEvent::AxisHover {
                index,
                coordinate,
                data_key,
            } => self.on_axis_hover(index, *coordinate, data_key.as_ref()),
            InteractionEvent::AxisClick {
                index,
                coordinate,
                data_key,
            } => self.on_axis_click(index, *coordinate, data_key.as_ref()),
            InteractionEvent::ItemHover {
                index,
                coordinate,
                data_key,
            } => self.on_item_hover(index, *coordinate, data_key.as_ref()),
            InteractionEvent::ItemClick {
                index,
                coordinate,
                data_key,
            } => self.on_item_click(index, *coordinate, data_key.as_ref()),
            InteractionEvent::LeaveChart => self.on_leave_chart(),
            InteractionEvent::LeaveItem => self.on_leave_item(),
            InteractionEvent::KeyboardFocus { index, coordinate } => {
                self.on_keyboard_focus(index, *coordinate);
            }
            InteractionEvent::KeyboardBlur => self.on_keyboard_blur(),
        }
    }

    fn on_axis_hover(
        &mut self,
        index: &TooltipIndex,
        coordinate: Option<Coordinate>,
        data_key: Option<&DataKey>,
    ) {
        let axis = &mut self.axis_interaction;
        axis.active_mouse_over_axis_index = Some(index.clone());
        axis.active_mouse_over_axis_data_key = data_key.cloned();
        axis.has_been_active_previously = true;
        if coordinate.is_some() {
            axis.active_mouse_over_axis_coordinate = coordinate;
        }
    }

    fn on_axis_click(
        &mut self,
        index: &TooltipIndex,
        coordinate: Option<Coordinate>,
        data_key: Option<&DataKey>,
    ) {
        let axis = &mut self.axis_interaction;
        axis.active_click_axis_index = Some(index.clone());
        axis.active_click_axis_data_key = data_key.cloned();
        if coordinate.is_some() {
            axis.active_click_axis_coordinate = coordinate;
        }
        self.keyboard_interaction.active = false;
    }

    fn on_item_hover(
        &mut self,
        index: &TooltipIndex,
        coordinate: Option<Coordinate>,
        data_key: Option<&DataKey>,
    ) {
        let item = &mut self.item_interaction;
        item.active_mouse_over_index = Some(index.clone());
        item.active_mouse_over_data_key = data_key.cloned();
        item.has_been_active_previously = true;
        if coordinate.is_some() {
            item.active_mouse_over_coordinate = coordinate;
        }
    }

    fn on_item_click(
        &mut self,
        index: &TooltipIndex,
        coordinate: Option<Coordinate>,
        data_key: Option<&DataKey>,
    ) {
        let item = &mut self.item_interaction;
        item.active_click_index = Some(index.clone());
        item.active_click_data_key = data_key.cloned();
        if coordinate.is_some() {
            item.active_click_coordinate = coordinate;
        }
        self.keyboard_interaction.active = false;
    }

    fn on_leave_chart(&mut self) {
        let axis = &mut self.axis_interaction;
        axis.active_mouse_over_axis_index = None;
        axis.active_mouse_over_axis_data_key = None;
    }

    fn on_leave_item(&mut self) {
        let item = &mut self.item_interaction;
        item.active_mouse_over_index = None;
        item.active_mouse_over_data_key = None;
    }

    fn on_keyboard_focus(&mut self, index: &TooltipIndex, coordinate: Option<Coordinate>) {
        let keyboard = &mut self.keyboard_interaction;
        keyboard.active = true;
        keyboard.has_been_active_previously = true;
        keyboard.index = Some(index.clone());
        if coordinate.is_some() {
            keyboard.coordinate = coordinate;
        }
    }

    fn on_keyboard_blur(&mut self) {
        self.keyboard_interaction.active = false;
        self.keyboard_interaction.index = None;
    }
}

impl AxisInteraction {
    /// Whether an axis hover was ever recorded.
    #[must_use]
    pub fn has_been_active_previously(&self) -> bool {
        self.has_been_active_previously
    }

    #[must_use]
    pub fn active_mouse_over_axis_index(&self) -> Option<&TooltipIndex> {
        self.active_mouse_over_axis_index.as_ref()
    }

    #[must_use]
    pub fn active_click_axis_index(&self) -> Option<&TooltipIndex> {
        self.active_click_axis_index.as_ref()
    }

    #[must_use]
    pub fn active_mouse_over_axis_data_key(&self) -> Option<&DataKey> {
        self.active_mouse_over_axis_data_key.as_ref()
    }

    #[must_use]
    pub fn active_click_axis_data_key(&self) -> Option<&DataKey> {
        self.active_click_axis_data_key.as_ref()
    }

    #[must_use]
    pub fn active_mouse_over_axis_coordinate(&self) -> Option<Coordinate> {
        self.active_mouse_over_axis_coordinate
    }

    #[must_use]
    pub fn active_click_axis_coordinate(&self) -> Option<Coordinate> {
        self.active_click_axis_coordinate
    }
}

impl ItemInteraction {
    /// Whether an item hover was ever recorded.
    #[must_use]
    pub fn has_been_active_previously(&self) -> bool {
        self.has_been_active_previously
    }

    #[must_use]
    pub fn active_mouse_over_index(&self) -> Option<&TooltipIndex> {
        self.active_mouse_over_index.as_ref()
    }

    #[must_use]
    pub fn active_click_index(&self) -> Option<&TooltipIndex> {
        self.active_click_index.as_ref()
    }

    #[must_use]
    pub fn active_mouse_over_data_key(&self) -> Option<&DataKey> {
        self.active_mouse_over_data_key.as_ref()
    }

    #[must_use]
    pub fn active_click_data_key(&self) -> Option<&DataKey> {
        self.active_click_data_key.as_ref()
    }

    #[must_use]
    pub fn active_mouse_over_coordinate(&self) -> Option<Coordinate> {
        self.active_mouse_over_coordinate
    }

    #[must_use]
    pub fn active_click_coordinate(&self) -> Option<Coordinate> {
        self.active_click_coordinate
    }
}

impl KeyboardInteraction {
    #[must_use]
    pub fn has_been_active_previously(&self) -> bool {
        self.has_been_active_previously
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Index currently selected by keyboard navigation, if focus is held.
    #[must_use]
    pub fn active_index(&self) -> Option<&TooltipIndex> {
        if self.active { self.index.as_ref() } else { None }
    }

    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }
}
