//! Face symmetrization: detect faces and their eye midlines, then build
//! mirrored composites about a chosen face's midline.

pub mod shared {
    pub mod constants;
    pub mod frame;
    pub mod geometry;
}

pub mod detection {
    pub mod domain {
        pub mod face_detector;
        pub mod face_landmarks;
    }
    pub mod infrastructure;
}

pub mod imaging {
    pub mod domain {
        pub mod image_reader;
        pub mod image_source;
        pub mod image_viewer;
        pub mod image_writer;
    }
    pub mod infrastructure;
}

pub mod symmetry {
    pub mod domain {
        pub mod composite;
        pub mod face_sym;
        pub mod face_sym_error;
        pub mod midline;
        pub mod symmetrized_images;
    }
}

pub mod rendering {
    pub mod face_annotator;
    pub mod label_font;
}

pub mod pipeline {
    pub mod batch_logger;
    pub mod symmetrize_sources_use_case;
}
