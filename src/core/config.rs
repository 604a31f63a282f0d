pub const EPSILON: f32 = 1e-5;
