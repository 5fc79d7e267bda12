//! The picker that keeps one color in sync across every way of editing it.

use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use bitflags::bitflags;
use log::{debug, trace, warn};

use crate::input::{parse_number, Drafts};
use crate::{
    Bitmap, CmykChannel, ColorState, Field, Hex, Hsv, Hub, InputError, Marker, Mode,
    PickerOptions, Point, PointerEvent, PointerKind, Rgb, RgbChannel, Store, Subscription,
    Surface, Throttle,
};

bitflags! {
    /// What an accepted update recomputed, repainted or moved.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Changed : u8 {
        /// The hue changed.
        const HUE = 1 << 0;
        /// The saturation or value changed.
        const SATURATION_VALUE = 1 << 1;
        /// At least one RGB channel changed.
        const RGB = 1 << 2;
        /// At least one CMYK channel changed.
        const CMYK = 1 << 3;
        /// The alpha changed.
        const ALPHA = 1 << 4;
        /// The canonical hex changed.
        const HEX = 1 << 5;
        /// The palette surface was repainted.
        const PALETTE = 1 << 6;
        /// The palette marker moved.
        const MARKER = 1 << 7;
    }
}

impl Changed {
    /// The representations that differ between two states.
    pub fn between(old: &ColorState, new: &ColorState) -> Self {
        let mut changed = Self::empty();
        changed.set(Self::HUE, old.hsv.hue != new.hsv.hue);
        changed.set(
            Self::SATURATION_VALUE,
            (old.hsv.saturation, old.hsv.value) != (new.hsv.saturation, new.hsv.value),
        );
        changed.set(Self::RGB, old.rgb != new.rgb);
        changed.set(Self::CMYK, old.cmyk != new.cmyk);
        changed.set(Self::ALPHA, old.alpha != new.alpha);
        changed.set(Self::HEX, old.hex != new.hex);
        changed
    }
}

/// The outcome of an operation on a [`ColorPicker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Update {
    /// The state was replaced and change listeners were notified.
    Applied(Changed),
    /// The text was kept as the field's draft; the state is untouched.
    Drafted,
    /// A pointer move is waiting for its throttle window.
    Pending,
    /// Nothing changed.
    Unchanged,
}

impl Update {
    /// What changed, empty unless the update was applied.
    pub fn changed(&self) -> Changed {
        match self {
            Self::Applied(changed) => *changed,
            _ => Changed::empty(),
        }
    }
}

/// Keeps every representation of the picked color in sync with whatever the
/// user edits: the hue slider, the palette marker, the alpha slider or one of
/// the text fields.
///
/// Every operation that replaces the state notifies the change listeners
/// with the full new state. Listeners must not call back into the picker.
pub struct ColorPicker<S = Bitmap, St = ColorState> {
    options: PickerOptions,
    surface: S,
    painted: u16,
    store: St,
    marker: Marker,
    dragging: bool,
    throttle: Throttle<Point>,
    drafts: Drafts,
    changes: Hub<ColorState>,
    commits: Hub<ColorState>,
}

impl ColorPicker {
    /// Create a picker with an in-memory palette of the configured size.
    pub fn new(options: PickerOptions) -> Self {
        Self::with_surface(Bitmap::new(options.palette), options)
    }
}

impl<S: Surface, St: Store> ColorPicker<S, St> {
    /// Create a picker that paints the palette on the given surface. The
    /// surface size takes precedence over the configured palette size.
    pub fn with_surface(mut surface: S, options: PickerOptions) -> Self
    where
        St: From<ColorState>,
    {
        let state = options.initial_state();
        surface.paint(state.hsv.hue);
        let marker = Marker::from_hsv(state.hsv, surface.size(), options.marker_half);

        Self {
            painted: state.hsv.hue,
            throttle: Throttle::new(options.throttle),
            store: St::from(state),
            options,
            surface,
            marker,
            dragging: false,
            drafts: Drafts::default(),
            changes: Hub::new(),
            commits: Hub::new(),
        }
    }

    /// The current state.
    pub fn state(&self) -> &ColorState {
        self.store.current()
    }

    /// The store holding the current state.
    pub fn store(&self) -> &St {
        &self.store
    }

    /// The options the picker was created with.
    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// The palette surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The palette marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Whether the palette marker is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The fully saturated color of the current hue.
    pub fn hue_color(&self) -> Rgb {
        self.state().hue_color()
    }

    /// The fields on display, in order.
    pub fn fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| match field {
                Field::Hex | Field::Rgb(_) => true,
                Field::Alpha => self.options.transparency,
                Field::Cmyk(_) => self.options.mode == Mode::Cmyk,
            })
            .collect()
    }

    /// The text a field shows: its draft if there is one, otherwise the
    /// current value.
    pub fn text(&self, field: Field) -> Cow<'_, str> {
        if let Some(draft) = self.drafts.get(field) {
            return Cow::Borrowed(draft);
        }

        let state = self.state();
        match field {
            Field::Hex => Cow::Borrowed(state.hex.as_str()),
            Field::Rgb(channel) => Cow::Owned(state.rgb.get(channel).to_string()),
            Field::Alpha => Cow::Owned(state.alpha.map(|a| a.to_string()).unwrap_or_default()),
            Field::Cmyk(channel) => Cow::Owned(state.cmyk.get(channel).to_string()),
        }
    }

    /// Register a listener for every accepted change.
    pub fn on_change(&self, listener: impl FnMut(&ColorState) + 'static) -> Subscription {
        self.changes.subscribe(listener)
    }

    /// Register a listener for commits.
    pub fn on_commit(&self, listener: impl FnMut(&ColorState) + 'static) -> Subscription {
        self.commits.subscribe(listener)
    }

    /// Notify the commit listeners with the current state.
    pub fn commit(&self) {
        self.commits.emit(self.state());
    }

    /// Move the hue slider. The palette is repainted for the new hue and the
    /// color under the marker becomes the new color; saturation and value
    /// stay where they are.
    pub fn set_hue(&mut self, hue: u16) -> Update {
        let hue = hue.min(360);
        let repainted = self.paint(hue);

        let state = self.state();
        let rgb = self.sample(self.marker);
        let mut next = ColorState::from_rgb(rgb, state.alpha);
        next.hsv = Hsv { hue, ..state.hsv };

        self.apply(next, repainted, false)
    }

    /// Click on the palette.
    pub fn click(&mut self, position: Point) -> Update {
        self.pick(position)
    }

    /// Press the pointer on the palette and start dragging the marker.
    pub fn pointer_down(&mut self, position: Point, now: Instant) -> Update {
        self.dragging = true;
        self.throttle.take();
        self.throttle.mark(now);
        self.pick(position)
    }

    /// Move the pointer anywhere in the document. Only has an effect while
    /// dragging, and at most once per throttle window.
    pub fn pointer_move(&mut self, position: Point, now: Instant) -> Update {
        if !self.dragging {
            return Update::Unchanged;
        }

        match self.throttle.offer(position, now) {
            Some(position) => self.pick(position),
            None => {
                trace!("deferred pointer move to {:?}", position);
                Update::Pending
            }
        }
    }

    /// Apply a deferred pointer move once its throttle window has passed.
    pub fn tick(&mut self, now: Instant) -> Update {
        match self.throttle.flush(now) {
            Some(position) => self.pick(position),
            None => Update::Unchanged,
        }
    }

    /// Release the pointer anywhere in the document. A deferred move is
    /// applied before dragging stops.
    pub fn pointer_up(&mut self) -> Update {
        if !self.dragging {
            return Update::Unchanged;
        }

        self.dragging = false;
        match self.throttle.take() {
            Some(position) => self.pick(position),
            None => Update::Unchanged,
        }
    }

    /// Move the alpha slider. The value is clamped to `0..=100`.
    pub fn set_alpha(&mut self, alpha: u8) -> Result<Update, InputError> {
        if !self.options.transparency {
            return Err(InputError::TransparencyDisabled);
        }

        let state = self.state();
        let alpha = Some(alpha.min(crate::config::OPAQUE));
        let next = ColorState {
            alpha,
            hex: state.rgb.to_hex(alpha),
            ..state.clone()
        };

        Ok(self.apply(next, false, false))
    }

    /// Handle text typed into a field.
    pub fn input(&mut self, field: Field, text: &str) -> Result<Update, InputError> {
        match field {
            Field::Hex => self.hex_input(text),
            Field::Rgb(channel) => self.rgb_input(channel, text),
            Field::Alpha => self.alpha_input(text),
            Field::Cmyk(channel) => self.cmyk_input(channel, text),
        }
    }

    /// Handle text typed into the HEX field.
    ///
    /// The typed text stays on display either way. If it is a valid hex
    /// color everything else follows it; otherwise it is only kept as a
    /// draft and the error is returned.
    pub fn hex_input(&mut self, text: &str) -> Result<Update, InputError> {
        let hex = match Hex::parse(text) {
            Ok(hex) => hex,
            Err(err) => {
                debug!("keeping {:?} as a draft: {}", text, err);
                self.drafts.set(Field::Hex, text);
                return Err(err.into());
            }
        };

        let alpha = match (self.options.transparency, hex.alpha) {
            (false, _) => None,
            (true, Some(alpha)) => Some(alpha),
            (true, None) => self.state().alpha,
        };

        let update = self.resync(ColorState::from_rgb(hex.rgb, alpha));
        if text != self.state().hex {
            self.drafts.set(Field::Hex, text);
        }
        Ok(update)
    }

    /// Handle text typed into an RGB field.
    pub fn rgb_input(&mut self, channel: RgbChannel, text: &str) -> Result<Update, InputError> {
        let Some(value) = self.number(Field::Rgb(channel), text, channel.max())? else {
            return Ok(Update::Drafted);
        };

        let state = self.state();
        let next = ColorState::from_rgb(state.rgb.with(channel, value), state.alpha);
        Ok(self.resync(next))
    }

    /// Handle text typed into a CMYK field.
    pub fn cmyk_input(&mut self, channel: CmykChannel, text: &str) -> Result<Update, InputError> {
        let Some(value) = self.number(Field::Cmyk(channel), text, channel.max())? else {
            return Ok(Update::Drafted);
        };

        let state = self.state();
        let next = ColorState::from_cmyk(state.cmyk.with(channel, value), state.alpha);
        Ok(self.resync(next))
    }

    /// Handle text typed into the alpha field. Empty text means fully
    /// transparent.
    pub fn alpha_input(&mut self, text: &str) -> Result<Update, InputError> {
        if !self.options.transparency {
            return Err(InputError::TransparencyDisabled);
        }

        let alpha = self
            .number(Field::Alpha, text, u32::from(crate::config::OPAQUE))?
            .unwrap_or(0);
        self.set_alpha(alpha as u8)
    }

    /// Connect the picker to document-level pointer events for as long as
    /// the returned subscription lives. The picker is held weakly.
    pub fn attach(picker: &Rc<RefCell<Self>>, pointer: &Hub<PointerEvent>) -> Subscription
    where
        S: 'static,
        St: 'static,
    {
        let picker = Rc::downgrade(picker);
        pointer.subscribe(move |event: &PointerEvent| {
            let Some(picker) = picker.upgrade() else {
                return;
            };
            let Ok(mut picker) = picker.try_borrow_mut() else {
                warn!("dropping {:?}, the picker is busy", event.kind);
                return;
            };
            match event.kind {
                PointerKind::Move => picker.pointer_move(event.position, event.at),
                PointerKind::Up => picker.pointer_up(),
            };
        })
    }

    /// Parse a numeric field. Empty text is drafted, rejected text reverts
    /// the field.
    fn number(&mut self, field: Field, text: &str, max: u32) -> Result<Option<u32>, InputError> {
        match parse_number(text, max) {
            Ok(Some(value)) => Ok(Some(value)),
            Ok(None) => {
                self.drafts.set(field, text);
                Ok(None)
            }
            Err(err) => {
                debug!("rejected {} input: {}", field, err);
                self.drafts.remove(field);
                Err(err)
            }
        }
    }

    fn paint(&mut self, hue: u16) -> bool {
        if hue == self.painted {
            return false;
        }
        self.surface.paint(hue);
        self.painted = hue;
        true
    }

    fn sample(&self, marker: Marker) -> Rgb {
        self.surface.sample(marker.sample_point(self.surface.size()))
    }

    /// Move the marker to a pointer position and take the color under it.
    fn pick(&mut self, position: Point) -> Update {
        let size = self.surface.size();
        let marker = Marker::from_pointer(position, size, self.options.marker_half);
        let (saturation, value) = marker.saturation_value(size);

        let state = self.state();
        let mut next = ColorState::from_rgb(self.sample(marker), state.alpha);
        next.hsv = Hsv::new(state.hsv.hue, saturation, value);

        let moved = self.move_marker(marker);
        self.apply(next, false, moved)
    }

    /// Bring the palette and the marker in line with a state derived from
    /// text input, then apply it.
    fn resync(&mut self, next: ColorState) -> Update {
        let repainted = self.paint(next.hsv.hue);
        let marker = Marker::from_hsv(next.hsv, self.surface.size(), self.options.marker_half);
        let moved = self.move_marker(marker);
        self.apply(next, repainted, moved)
    }

    fn move_marker(&mut self, marker: Marker) -> bool {
        let moved = marker != self.marker;
        self.marker = marker;
        moved
    }

    fn apply(&mut self, next: ColorState, repainted: bool, moved: bool) -> Update {
        self.drafts.clear();

        let mut changed = Changed::between(self.state(), &next);
        changed.set(Changed::PALETTE, repainted);
        changed.set(Changed::MARKER, moved);
        if changed.is_empty() {
            return Update::Unchanged;
        }

        self.store.replace(next);
        self.changes.emit(self.store.current());
        Update::Applied(changed)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{Cmyk, Size, Snapshots};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn picker() -> ColorPicker {
        ColorPicker::new(PickerOptions::default())
    }

    fn transparent(alpha: u8) -> ColorPicker {
        ColorPicker::new(
            PickerOptions::default()
                .with_transparency(true)
                .with_rgb(Rgb::RED, Some(alpha)),
        )
    }

    fn record(picker: &ColorPicker) -> (Rc<RefCell<Vec<ColorState>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = picker.on_change(move |state| sink.borrow_mut().push(state.clone()));
        (seen, subscription)
    }

    #[test]
    fn starts_with_the_initial_color() {
        let picker = picker();
        assert_eq!(picker.state(), &ColorState::from_rgb(Rgb::RED, None));
        assert_eq!(picker.marker().position, Point::new(230, -10));
        assert_eq!(picker.surface().sample(Point::new(239, 0)), Rgb::RED);
        assert!(!picker.is_dragging());
    }

    #[test]
    fn starts_from_cmyk() {
        let picker = ColorPicker::new(
            PickerOptions::default()
                .with_cmyk(Cmyk::new(0, 0, 100, 0), None)
                .with_mode(Mode::Cmyk),
        );
        assert_eq!(picker.state().rgb, Rgb::new(255, 255, 0));
        assert_eq!(picker.state().hsv, Hsv::new(60, 100, 100));
        assert_eq!(picker.text(Field::Cmyk(CmykChannel::Yellow)), "100");
    }

    #[test]
    fn hue_change_resamples_under_the_marker() {
        let mut picker = picker();
        let (seen, _subscription) = record(&picker);

        let update = picker.set_hue(120);
        let changed = update.changed();
        assert!(changed.contains(Changed::HUE | Changed::PALETTE | Changed::RGB | Changed::HEX));
        assert!(!changed.intersects(Changed::MARKER | Changed::SATURATION_VALUE));

        let state = picker.state();
        assert_eq!(state.hsv, Hsv::new(120, 100, 100));
        assert_eq!(state.rgb, Rgb::new(0, 255, 0));
        assert_eq!(state.cmyk, Cmyk::new(100, 0, 100, 0));
        assert_eq!(state.hex, "#00ff00");
        assert_eq!(picker.hue_color(), Rgb::new(0, 255, 0));
        assert_eq!(seen.borrow().len(), 1);
        assert!(state.is_consistent());
    }

    #[test]
    fn hue_is_clamped() {
        let mut picker = picker();
        picker.set_hue(400);
        assert_eq!(picker.state().hsv.hue, 360);
        assert_eq!(picker.state().rgb, Rgb::RED);
    }

    #[test]
    fn same_hue_changes_nothing() {
        let mut picker = picker();
        let (seen, _subscription) = record(&picker);
        assert_eq!(picker.set_hue(0), Update::Unchanged);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn hue_change_keeps_saturation_and_value() {
        let mut picker = picker();
        picker.click(Point::new(120, 120));
        let before = picker.state().hsv;

        picker.set_hue(200);
        assert_eq!(picker.state().hsv.saturation, before.saturation);
        assert_eq!(picker.state().hsv.value, before.value);
        assert_eq!(picker.state().hsv.hue, 200);
    }

    #[test]
    fn click_picks_the_color_under_the_marker() {
        let mut picker = picker();

        let update = picker.click(Point::new(0, 0));
        assert!(update.changed().contains(Changed::MARKER | Changed::RGB));
        assert_eq!(picker.marker().position, Point::new(-10, -10));
        assert_eq!(picker.state().rgb, Rgb::WHITE);
        assert_eq!(picker.state().hsv, Hsv::new(0, 0, 100));
        assert_eq!(picker.state().hex, "#ffffff");

        picker.click(Point::new(120, 500));
        assert_eq!(picker.marker().position, Point::new(110, 230));
        assert_eq!(picker.state().rgb, Rgb::BLACK);
        assert_eq!(picker.state().hsv, Hsv::new(0, 50, 0));
        assert_eq!(picker.state().cmyk, Cmyk::new(0, 0, 0, 100));
    }

    #[test]
    fn drag_is_throttled() {
        let start = Instant::now();
        let mut picker = picker();
        let (seen, _subscription) = record(&picker);

        assert!(matches!(
            picker.pointer_down(Point::new(0, 0), start),
            Update::Applied(_)
        ));
        assert!(picker.is_dragging());
        assert_eq!(picker.pointer_move(Point::new(120, 120), start + ms(3)), Update::Pending);
        assert_eq!(picker.pointer_move(Point::new(240, 0), start + ms(6)), Update::Pending);
        assert_eq!(picker.tick(start + ms(8)), Update::Unchanged);
        assert_eq!(seen.borrow().len(), 1);

        // Only the latest position is applied.
        assert!(matches!(picker.tick(start + ms(10)), Update::Applied(_)));
        assert_eq!(picker.state().rgb, Rgb::RED);
        assert_eq!(seen.borrow().len(), 2);

        assert_eq!(picker.pointer_move(Point::new(0, 240), start + ms(12)), Update::Pending);
        assert!(matches!(picker.pointer_up(), Update::Applied(_)));
        assert!(!picker.is_dragging());
        assert_eq!(picker.state().rgb, Rgb::BLACK);
        assert_eq!(picker.marker().position, Point::new(-10, 230));
        assert_eq!(seen.borrow().len(), 3);

        assert_eq!(picker.pointer_move(Point::new(0, 0), start + ms(50)), Update::Unchanged);
        assert_eq!(picker.pointer_up(), Update::Unchanged);
    }

    #[test]
    fn moves_without_dragging_are_ignored() {
        let mut picker = picker();
        let (seen, _subscription) = record(&picker);
        assert_eq!(picker.pointer_move(Point::new(0, 0), Instant::now()), Update::Unchanged);
        assert_eq!(picker.state().rgb, Rgb::RED);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn hex_input() {
        let mut picker = picker();
        let (seen, _subscription) = record(&picker);

        let update = picker.input(Field::Hex, "#00f").unwrap();
        assert!(update.changed().contains(Changed::PALETTE | Changed::HUE));
        assert!(!update.changed().contains(Changed::MARKER));

        let state = picker.state();
        assert_eq!(state.rgb, Rgb::new(0, 0, 255));
        assert_eq!(state.hsv, Hsv::new(240, 100, 100));
        assert_eq!(state.cmyk, Cmyk::new(100, 100, 0, 0));
        assert_eq!(state.hex, "#0000ff");
        assert_eq!(picker.text(Field::Hex), "#00f");
        assert_eq!(picker.text(Field::Rgb(RgbChannel::Blue)), "255");
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn hex_input_moves_the_marker() {
        let mut picker = picker();
        picker.hex_input("808080").unwrap();
        assert_eq!(picker.state().hsv, Hsv::new(0, 0, 50));
        assert_eq!(picker.marker().position, Point::new(-10, 110));
    }

    #[test]
    fn invalid_hex_is_only_a_draft() {
        let mut picker = picker();
        let (seen, _subscription) = record(&picker);

        assert_eq!(
            picker.input(Field::Hex, "#ff00"),
            Err(InputError::Hex(crate::ParseHexError::InvalidLength(4)))
        );
        assert_eq!(
            picker.input(Field::Hex, "zzz"),
            Err(InputError::Hex(crate::ParseHexError::InvalidDigit('z')))
        );
        assert_eq!(picker.text(Field::Hex), "zzz");
        assert_eq!(picker.state(), &ColorState::default());
        assert!(seen.borrow().is_empty());

        // Any accepted edit replaces the draft.
        picker.set_hue(120);
        assert_eq!(picker.text(Field::Hex), "#00ff00");
    }

    #[test]
    fn hex_alpha_depends_on_transparency() {
        let mut picker = picker();
        picker.hex_input("#0000ff80").unwrap();
        assert_eq!(picker.state().alpha, None);
        assert_eq!(picker.state().hex, "#0000ff");
        assert_eq!(picker.text(Field::Hex), "#0000ff80");

        let mut picker = transparent(50);
        picker.hex_input("00ff00").unwrap();
        assert_eq!(picker.state().alpha, Some(50));
        assert_eq!(picker.state().hex, "#00ff0080");

        picker.hex_input("#00ff00ff").unwrap();
        assert_eq!(picker.state().alpha, Some(100));
        assert_eq!(picker.state().hex, "#00ff00");
        assert_eq!(picker.text(Field::Hex), "#00ff00ff");
    }

    #[test]
    fn rgb_input() {
        let mut picker = picker();

        let update = picker.input(Field::Rgb(RgbChannel::Green), "300").unwrap();
        assert!(update.changed().contains(Changed::RGB | Changed::HUE | Changed::PALETTE));
        let state = picker.state();
        assert_eq!(state.rgb, Rgb::new(255, 255, 0));
        assert_eq!(state.hsv, Hsv::new(60, 100, 100));
        assert_eq!(state.cmyk, Cmyk::new(0, 0, 100, 0));
        assert_eq!(state.hex, "#ffff00");
        assert_eq!(picker.text(Field::Rgb(RgbChannel::Green)), "255");
    }

    #[test]
    fn empty_rgb_text_is_a_draft() {
        let mut picker = picker();
        let (seen, _subscription) = record(&picker);

        assert_eq!(picker.rgb_input(RgbChannel::Red, ""), Ok(Update::Drafted));
        assert_eq!(picker.text(Field::Rgb(RgbChannel::Red)), "");
        assert_eq!(picker.state().rgb, Rgb::RED);
        assert!(seen.borrow().is_empty());

        picker.rgb_input(RgbChannel::Red, "128").unwrap();
        assert_eq!(picker.text(Field::Rgb(RgbChannel::Red)), "128");
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn non_numeric_text_reverts() {
        let mut picker = picker();
        picker.rgb_input(RgbChannel::Red, "").unwrap();

        assert_eq!(
            picker.rgb_input(RgbChannel::Red, "1a"),
            Err(InputError::NotNumeric("1a".to_owned()))
        );
        assert_eq!(picker.text(Field::Rgb(RgbChannel::Red)), "255");
        assert_eq!(picker.state().rgb, Rgb::RED);
    }

    #[test]
    fn cmyk_input_keeps_the_typed_inks() {
        let mut picker = ColorPicker::new(PickerOptions::default().with_mode(Mode::Cmyk));

        picker.cmyk_input(CmykChannel::Black, "50").unwrap();
        let state = picker.state();
        assert_eq!(state.cmyk, Cmyk::new(0, 100, 100, 50));
        assert_eq!(state.rgb, Rgb::new(128, 0, 0));
        assert_eq!(state.hsv, Hsv::new(0, 100, 50));
        assert_eq!(state.hex, "#800000");

        picker.cmyk_input(CmykChannel::Cyan, "100").unwrap();
        let state = picker.state();
        assert_eq!(state.cmyk, Cmyk::new(100, 100, 100, 50));
        assert_eq!(state.rgb, Rgb::BLACK);
        assert_eq!(picker.marker().position, Point::new(-10, 230));

        assert_eq!(picker.cmyk_input(CmykChannel::Cyan, ""), Ok(Update::Drafted));
        assert_eq!(picker.text(Field::Cmyk(CmykChannel::Cyan)), "");
        assert_eq!(picker.state().cmyk.cyan, 100);
    }

    #[test]
    fn alpha_slider_and_text() {
        let mut picker = transparent(100);
        let (seen, _subscription) = record(&picker);

        let update = picker.set_alpha(50).unwrap();
        assert_eq!(update, Update::Applied(Changed::ALPHA | Changed::HEX));
        assert_eq!(picker.state().hex, "#ff000080");
        assert_eq!(picker.state().cmyk, Cmyk::new(0, 100, 100, 0));

        picker.alpha_input("150").unwrap();
        assert_eq!(picker.state().alpha, Some(100));
        assert_eq!(picker.state().hex, "#ff0000");

        picker.alpha_input("").unwrap();
        assert_eq!(picker.state().alpha, Some(0));
        assert_eq!(picker.state().hex, "#ff000000");
        assert_eq!(picker.text(Field::Alpha), "0");

        assert_eq!(
            picker.alpha_input("x"),
            Err(InputError::NotNumeric("x".to_owned()))
        );
        assert_eq!(picker.state().alpha, Some(0));
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn alpha_without_transparency_is_rejected() {
        let mut picker = picker();
        assert_eq!(picker.set_alpha(50), Err(InputError::TransparencyDisabled));
        assert_eq!(
            picker.input(Field::Alpha, "50"),
            Err(InputError::TransparencyDisabled)
        );
        assert_eq!(picker.state().alpha, None);
        assert_eq!(picker.text(Field::Alpha), "");
    }

    #[test]
    fn fields_follow_the_options() {
        let picker = picker();
        assert_eq!(
            picker.fields(),
            vec![
                Field::Hex,
                Field::Rgb(RgbChannel::Red),
                Field::Rgb(RgbChannel::Green),
                Field::Rgb(RgbChannel::Blue),
            ]
        );

        let picker = ColorPicker::new(
            PickerOptions::default()
                .with_mode(Mode::Cmyk)
                .with_transparency(true),
        );
        assert_eq!(picker.fields(), Field::ALL.to_vec());

        let picker = ColorPicker::new(PickerOptions::default().with_mode(Mode::Cmyk));
        assert!(!picker.fields().contains(&Field::Alpha));
        assert_eq!(picker.fields().len(), 8);
    }

    #[test]
    fn text_shows_every_field() {
        let picker = transparent(40);
        #[rustfmt::skip]
        let expected = [
            "#ff000066",
            "255", "0", "0",
            "40",
            "0", "100", "100", "0",
        ];
        for (field, text) in Field::ALL.into_iter().zip(expected) {
            assert_eq!(picker.text(field), text, "{}", field);
        }
    }

    #[test]
    fn commit_notifies_commit_listeners_only() {
        let picker = picker();
        let (changes, _changes) = record(&picker);

        let commits = Rc::new(RefCell::new(Vec::new()));
        let _commits = picker.on_commit({
            let commits = Rc::clone(&commits);
            move |state: &ColorState| commits.borrow_mut().push(state.hex.clone())
        });

        picker.commit();
        assert_eq!(*commits.borrow(), vec!["#ff0000".to_owned()]);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn dropped_listeners_are_not_notified() {
        let mut picker = picker();
        let (seen, subscription) = record(&picker);

        picker.set_hue(10);
        drop(subscription);
        picker.set_hue(20);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].hsv.hue, 10);
    }

    #[test]
    fn attached_pointer_events() {
        let start = Instant::now();
        let picker = Rc::new(RefCell::new(picker()));
        let document = Hub::new();
        let subscription = ColorPicker::attach(&picker, &document);

        picker.borrow_mut().pointer_down(Point::new(120, 120), start);
        document.emit(&PointerEvent::moved(Point::new(0, 0), start + ms(20)));
        assert_eq!(picker.borrow().state().rgb, Rgb::WHITE);

        document.emit(&PointerEvent::moved(Point::new(240, 0), start + ms(21)));
        document.emit(&PointerEvent::up(Point::new(240, 0), start + ms(22)));
        assert!(!picker.borrow().is_dragging());
        assert_eq!(picker.borrow().state().rgb, Rgb::RED);

        drop(subscription);
        assert!(document.is_empty());
    }

    #[test]
    fn attachment_does_not_keep_the_picker_alive() {
        let picker = Rc::new(RefCell::new(picker()));
        let document = Hub::new();
        ColorPicker::attach(&picker, &document).detach();

        drop(picker);
        document.emit(&PointerEvent::up(Point::new(0, 0), Instant::now()));
    }

    #[test]
    fn snapshot_store() {
        let options = PickerOptions::default().with_palette(Size::new(100, 100));
        let mut picker =
            ColorPicker::<Bitmap, Snapshots>::with_surface(Bitmap::new(options.palette), options);
        let before = picker.store().snapshot();

        picker.set_hue(120);
        picker.hex_input("#123").unwrap();
        assert_eq!(picker.store().revision(), 2);
        assert_eq!(before.hex, "#ff0000");
        assert_eq!(picker.state().hex, "#112233");
        assert!(picker.state().is_consistent());
    }

    #[test]
    fn typed_colors_read_back_from_the_palette() {
        let mut picker = picker();

        #[track_caller]
        fn read_back(picker: &mut ColorPicker, rgb: Rgb) -> Rgb {
            picker.hex_input(&rgb.to_hex(None)).unwrap();
            assert_eq!(picker.state().rgb, rgb);
            let surface = picker.surface();
            surface.sample(picker.marker().sample_point(surface.size()))
        }

        for red in (0..=255).step_by(51) {
            for green in (0..=255).step_by(51) {
                for blue in (0..=255).step_by(51) {
                    let rgb = Rgb::new(red, green, blue);
                    crate::assert_channels_near!(read_back(&mut picker, rgb), rgb, 5);
                }
            }
        }

        assert_eq!(
            read_back(&mut picker, Rgb::new(0, 221, 153)),
            Rgb::new(0, 222, 156)
        );
        assert_eq!(
            read_back(&mut picker, Rgb::new(6, 28, 246)),
            Rgb::new(4, 23, 246)
        );
    }

    #[test]
    fn every_update_stays_consistent() {
        let mut picker = ColorPicker::new(
            PickerOptions::default()
                .with_mode(Mode::Cmyk)
                .with_transparency(true),
        );

        for hue in (0..=360).step_by(45) {
            picker.set_hue(hue);
            for (x, y) in [(10, 10), (200, 30), (60, 180), (239, 239)] {
                picker.click(Point::new(x, y));
                assert!(picker.state().is_consistent(), "{:?}", picker.state());
            }
        }
    }
}
