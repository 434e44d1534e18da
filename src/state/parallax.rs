/// Hero "floating city" tilt derived from the pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CityTilt {
    pub rotate_y: f64,
    pub rotate_x: f64,
}

impl CityTilt {
    pub fn from_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let mouse_x = client_x / width - 0.5;
        let mouse_y = client_y / height - 0.5;
        Some(Self {
            rotate_y: mouse_x * 10.0,
            rotate_x: mouse_y * 5.0,
        })
    }

    pub fn transform(&self) -> String {
        format!(
            "translateY(-20px) rotateY({}deg) rotateX({}deg)",
            self.rotate_y, self.rotate_x
        )
    }
}
