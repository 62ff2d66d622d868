use crate::models::Location;
use crate::route::Route;

/// Receives the newly current location after every navigation step.
pub trait ViewportObserver {
    fn focus(&mut self, index: usize, location: &Location);
}

/// A missing viewport (e.g. the map failed to mount) ignores focus changes.
impl<O: ViewportObserver> ViewportObserver for Option<O> {
    fn focus(&mut self, index: usize, location: &Location) {
        if let Some(observer) = self {
            observer.focus(index, location);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Cyclic index over a sequence of `len` items. Has no position when `len == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationCursor {
    index: usize,
    len: usize,
}

impl NavigationCursor {
    pub fn new(len: usize) -> Self {
        NavigationCursor { index: 0, len }
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn advance_forward(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    pub fn advance_backward(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        Some(self.index)
    }

    pub fn step(&mut self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Forward => self.advance_forward(),
            Direction::Backward => self.advance_backward(),
        }
    }
}

/// A route together with the cursor walking it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    route: Route,
    cursor: NavigationCursor,
}

impl Tour {
    pub fn new(route: Route) -> Self {
        let cursor = NavigationCursor::new(route.len());
        Tour { route, cursor }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn cursor(&self) -> NavigationCursor {
        self.cursor
    }

    pub fn current_index(&self) -> Option<usize> {
        self.cursor.current()
    }

    pub fn current_location(&self) -> Option<&Location> {
        self.cursor.current().and_then(|i| self.route.get(i))
    }

    /// Move the cursor and hand the new current location to `observer`.
    /// Does nothing on an empty route.
    pub fn navigate<O: ViewportObserver>(
        &mut self,
        direction: Direction,
        observer: &mut O,
    ) -> Option<usize> {
        let index = self.cursor.step(direction)?;
        if let Some(location) = self.route.get(index) {
            observer.focus(index, location);
        }
        Some(index)
    }

    pub fn forward<O: ViewportObserver>(&mut self, observer: &mut O) -> Option<usize> {
        self.navigate(Direction::Forward, observer)
    }

    pub fn backward<O: ViewportObserver>(&mut self, observer: &mut O) -> Option<usize> {
        self.navigate(Direction::Backward, observer)
    }
}
