use num::Zero;
use std::fmt::Display;
use std::ops::Add;

/// A 2D vector generic over any numeric type.
///
/// Used for the horizontal position of the vehicle. On the wire it is encoded
/// as a two-element array `[x, y]`.
///
/// # Type Parameters
/// * `T` - The functionality for the vector depends on traits implemented by `T`.
#[derive(Debug, PartialEq, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(
    from = "[T; 2]",
    into = "[T; 2]",
    bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
)]
pub struct Vec2D<T: Copy> {
    /// The x-component of the vector.
    x: T,
    /// The y-component of the vector.
    y: T,
}

impl<T: Copy> Vec2D<T> {
    /// Creates a new vector with the given x and y components.
    ///
    /// # Arguments
    /// * `x` - The x-component of the vector.
    /// * `y` - The y-component of the vector.
    pub const fn new(x: T, y: T) -> Self { Self { x, y } }

    /// Returns the x-component of the vector.
    pub const fn x(&self) -> T { self.x }

    /// Returns the y-component of the vector.
    pub const fn y(&self) -> T { self.y }
}

impl<T: Zero + Copy> Vec2D<T> {
    /// The origin, also the home base of the vehicle.
    pub fn zero() -> Self { Self::new(T::zero(), T::zero()) }
}

impl<T: Zero + Copy> Default for Vec2D<T> {
    fn default() -> Self { Self::zero() }
}

impl<T: Add<Output = T> + Copy> Add for Vec2D<T> {
    type Output = Vec2D<T>;

    fn add(self, rhs: Self) -> Self::Output { Self::new(self.x + rhs.x, self.y + rhs.y) }
}

impl<T: Copy> From<[T; 2]> for Vec2D<T> {
    fn from(value: [T; 2]) -> Self { Self::new(value[0], value[1]) }
}

impl<T: Copy> From<Vec2D<T>> for [T; 2] {
    fn from(value: Vec2D<T>) -> Self { [value.x, value.y] }
}

impl<T: Display + Copy> Display for Vec2D<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
