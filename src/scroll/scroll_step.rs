use crate::error::ViewScrollError;

/// Block and unit increment pair for one axis
///
/// Always satisfies `block >= unit >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollStep {
    block: i32,
    unit: i32,
}

impl ScrollStep {
    pub const DEFAULT_BLOCK: i32 = 50;
    pub const DEFAULT_UNIT: i32 = 10;

    pub fn new(block: i32, unit: i32) -> Result<Self, ViewScrollError> {
        if unit < 0 || block < unit {
            return Err(ViewScrollError::InvalidScrollStep { block, unit });
        }
        Ok(Self { block, unit })
    }

    pub fn block(&self) -> i32 {
        self.block
    }

    pub fn unit(&self) -> i32 {
        self.unit
    }
}

impl Default for ScrollStep {
    fn default() -> Self {
        Self {
            block: Self::DEFAULT_BLOCK,
            unit: Self::DEFAULT_UNIT,
        }
    }
}
