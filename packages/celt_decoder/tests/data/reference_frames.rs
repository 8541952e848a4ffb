//! Frames encoded by the fixed-point libopus CELT encoder from synthetic
//! tones, clicks and noise, with what the fixed-point libopus decoder made
//! of them: return value, final range, error flag, an FNV-1a hash of the
//! interleaved output and its first samples.

pub struct ReferenceFrame {
    pub data: &'static [u8],
    pub result: usize,
    pub final_range: u32,
    pub error: bool,
    pub pcm_hash: u32,
    pub pcm_head: [i16; 8],
}

pub struct ReferenceCase {
    pub sample_rate: u32,
    pub channels: usize,
    pub stream_channels: usize,
    pub start_band: usize,
    pub frame_size: usize,
    pub frames: &'static [ReferenceFrame],
}

pub const MONO_TONAL_20MS: ReferenceCase = ReferenceCase {
    sample_rate: 48000,
    channels: 1,
    stream_channels: 1,
    start_band: 0,
    frame_size: 960,
    frames: &[
        ReferenceFrame {
            data: &[0xca, 0x6f, 0xd8, 0xf5, 0x37, 0x20, 0x7c, 0x1e, 0x33, 0x87, 0x7f, 0x54, 0xfb, 0xbe, 0x0b, 0x7b, 0x93, 0x7d, 0xfa, 0xc6, 0x38, 0x4a, 0x30, 0x08, 0xe7, 0xa0, 0xb4, 0x67, 0xb7, 0xf5, 0x96, 0xe7, 0xe5, 0x0a, 0x30, 0xdc, 0xa7, 0x0c, 0x03, 0x64, 0x60, 0x20, 0x54, 0x84, 0x14, 0x5f, 0x4d, 0x2d, 0x19, 0xdc, 0x4b, 0x29, 0x2c, 0x2d, 0xd1, 0x13, 0xec, 0x37, 0xd8, 0x08, 0xfc, 0xd7, 0x35, 0x56, 0xca, 0x1b, 0x43, 0xf7, 0x00, 0x27, 0x34, 0xa5, 0x62, 0x06, 0xbe, 0x17, 0x25, 0xe3, 0xba, 0xdb],
            result: 960,
            final_range: 0x534aad00,
            error: false,
            pcm_hash: 0x0c3295eb,
            pcm_head: [0, 0, 0, 0, -1, 0, -1, -2],
        },
        ReferenceFrame {
            data: &[0xc8, 0x81, 0xd3, 0x95, 0x60, 0x13, 0xa6, 0xad, 0xe6, 0x4b, 0xe9, 0x62, 0xe6, 0xf4, 0x29, 0xc9, 0xf9, 0x7d, 0x9b, 0xd9, 0xcc, 0xd8, 0x3a, 0xec, 0x32, 0x1b, 0x76, 0xb4, 0x79, 0x8a, 0x33, 0xec, 0x74, 0xb2, 0xb3, 0x47, 0x41, 0x14, 0xff, 0x09, 0xf5, 0xa2, 0x10, 0x01, 0x8b, 0x00, 0xdc, 0xc5, 0x73, 0x95, 0x30, 0x79, 0xf1, 0x98, 0x9c, 0x96, 0x18, 0xbc, 0xd0, 0x6e, 0x05, 0x43, 0x26, 0xbc, 0xda, 0xb7, 0xf7, 0xeb, 0x1b, 0x88, 0xac, 0x96, 0xdf, 0xd9, 0xa5, 0x3d, 0x25, 0xca, 0xf7, 0x5b],
            result: 960,
            final_range: 0x03dea800,
            error: false,
            pcm_hash: 0x61851b22,
            pcm_head: [-8599, -8542, -8471, -8386, -8288, -8175, -8049, -7909],
        },
        ReferenceFrame {
            data: &[0xc0, 0xee, 0xb8, 0xdf, 0xfd, 0x17, 0xd6, 0xc7, 0x8e, 0x30, 0x13, 0x04, 0x74, 0x02, 0x62, 0x90, 0x5d, 0xaa, 0x1a, 0x59, 0x61, 0x1a, 0x74, 0x0e, 0x1d, 0x56, 0x15, 0x46, 0x75, 0xee, 0x8d, 0x86, 0xb6, 0xb6, 0xfb, 0x4c, 0xeb, 0xd4, 0x00, 0x36, 0x7f, 0xb0, 0x91, 0x5d, 0x6d, 0xba, 0x8c, 0xad, 0x33, 0xd4, 0xd6, 0xc0, 0xcc, 0x6d, 0x9f, 0x72, 0xa6, 0x39, 0x0a, 0x02, 0xbe, 0xfd, 0xa8, 0x6e, 0xd9, 0xc8, 0x95, 0x3d, 0x3f, 0xd6, 0x19, 0x7e, 0x52, 0xc4, 0xbd, 0x7c, 0x95, 0xd3, 0xbf, 0x5c],
            result: 960,
            final_range: 0x009debe0,
            error: false,
            pcm_hash: 0x90da6e0c,
            pcm_head: [7866, 7699, 7528, 7353, 7171, 6987, 6801, 6610],
        },
        ReferenceFrame {
            data: &[0xc0, 0xee, 0x54, 0x06, 0x67, 0x69, 0x84, 0x57, 0xc6, 0x3f, 0x9a, 0x26, 0x00, 0x0c, 0xe9, 0x92, 0xdc, 0xa9, 0xb9, 0x1f, 0xf3, 0x37, 0x90, 0x24, 0x3c, 0x2e, 0x79, 0xac, 0x05, 0xb0, 0x6e, 0x8b, 0xbe, 0x19, 0x3d, 0x82, 0x98, 0x43, 0x6b, 0x40, 0x96, 0xab, 0x70, 0x0a, 0xad, 0x4e, 0x2e, 0xab, 0x76, 0xb3, 0x18, 0x0f, 0x07, 0x59, 0xf2, 0xd0, 0xe0, 0xf4, 0x67, 0xe1, 0x12, 0xeb, 0xf2, 0x44, 0x6f, 0xc2, 0xf6, 0x46, 0x59, 0x38, 0xa3, 0xa8, 0xb3, 0x3c, 0x7a, 0xab, 0xd3, 0x19, 0xc3, 0x5b],
            result: 960,
            final_range: 0x00ff8300,
            error: false,
            pcm_hash: 0x99d5ff41,
            pcm_head: [-3343, -3556, -3773, -3995, -4219, -4446, -4678, -4910],
        },
        ReferenceFrame {
            data: &[0xc0, 0xd8, 0xcc, 0xe7, 0x40, 0x94, 0xda, 0x8e, 0x56, 0x31, 0x5a, 0x56, 0xe2, 0x58, 0x4e, 0x98, 0xcf, 0x1f, 0x11, 0xaf, 0x7a, 0xb6, 0xc7, 0x8f, 0x7c, 0xf4, 0x73, 0xaa, 0x6a, 0x0c, 0x1e, 0x16, 0x74, 0xb7, 0x99, 0xf9, 0x3a, 0x1f, 0x05, 0x7d, 0xc1, 0x61, 0xc5, 0x77, 0x77, 0xba, 0x91, 0x60, 0x05, 0xe4, 0x37, 0x86, 0x00, 0x38, 0x7d, 0x6a, 0xa8, 0xfd, 0xe7, 0xad, 0xc3, 0x91, 0x72, 0xab, 0xce, 0x2a, 0x19, 0xe5, 0xb8, 0x97, 0x34, 0x1c, 0x6d, 0x5a, 0x4a, 0x5e, 0xa8, 0x03, 0xb7, 0x5b],
            result: 960,
            final_range: 0x01d21300,
            error: false,
            pcm_hash: 0xc6aab94d,
            pcm_head: [4316, 4666, 5009, 5342, 5664, 5977, 6278, 6566],
        },
    ],
};

pub const STEREO_CLICKS_10MS: ReferenceCase = ReferenceCase {
    sample_rate: 48000,
    channels: 2,
    stream_channels: 2,
    start_band: 0,
    frame_size: 480,
    frames: &[
        ReferenceFrame {
            data: &[0x7d, 0xd1, 0x58, 0xa7, 0xa5, 0x4b, 0xad, 0x3b, 0xfe, 0x4b, 0x9a, 0xa1, 0xda, 0xdb, 0x83, 0x14, 0x78, 0x61, 0x84, 0xde, 0xb6, 0x64, 0xbe, 0xe2, 0x7d, 0x73, 0x1f, 0x15, 0x31, 0x1b, 0x33, 0xb2, 0x76, 0x0a, 0x9b, 0xf5, 0x5b, 0x6a, 0x60, 0xe2, 0xa3, 0xe9, 0x79, 0x7e, 0xbb, 0xa1, 0xf5, 0x7a, 0x9e, 0x5a, 0x6f, 0x7f, 0xc3, 0xc1, 0x8a, 0xf4, 0xb6, 0xee, 0x5b, 0x4c, 0x3f, 0x35, 0x8c, 0x5d, 0xa4, 0x46, 0x1f, 0xe2, 0x33, 0x9e, 0x2b, 0x17, 0x43, 0x8d, 0x25, 0xe8, 0x2e, 0xfc, 0x48, 0x05, 0xe5, 0x1e, 0xa6, 0x03, 0x6a, 0x90, 0xf9, 0x9d, 0x08, 0xf3],
            result: 480,
            final_range: 0x013e8400,
            error: false,
            pcm_hash: 0x7182ca70,
            pcm_head: [0, 0, 2, 0, -2, -8, 1, 6],
        },
        ReferenceFrame {
            data: &[0x61, 0x23, 0x58, 0x97, 0x11, 0xd4, 0x08, 0xbb, 0x06, 0xc1, 0xe3, 0xcf, 0x91, 0x66, 0x93, 0x0f, 0x34, 0xdd, 0x09, 0x74, 0x34, 0xd1, 0x29, 0x6a, 0x01, 0x82, 0x92, 0xb3, 0x09, 0x7e, 0x45, 0xb2, 0xe2, 0xab, 0xfe, 0x43, 0x9f, 0x85, 0xa9, 0x66, 0x01, 0xfa, 0x65, 0x47, 0xe2, 0xd4, 0x8d, 0x9d, 0xf6, 0x62, 0x5a, 0xa1, 0x0c, 0x0b, 0x3c, 0x94, 0xd3, 0x90, 0xda, 0x23, 0x23, 0x5e, 0xc0, 0x02, 0xf8, 0x03, 0xe4, 0x83, 0x5d, 0x93, 0xe3, 0xf7, 0xdb, 0x10, 0x47, 0xb4, 0xea, 0x3a, 0xdb, 0x7a, 0x19, 0xc5, 0xf0, 0x2d, 0xaa, 0x1c, 0x18, 0x7d, 0x70, 0x83],
            result: 480,
            final_range: 0x0b0ac900,
            error: false,
            pcm_hash: 0x3f9fff32,
            pcm_head: [663, -266, 584, -780, 686, 351, 555, 407],
        },
        ReferenceFrame {
            data: &[0x1a, 0xaa, 0x87, 0x88, 0x9d, 0x4a, 0xdf, 0x37, 0x4c, 0xff, 0x6b, 0xca, 0x33, 0x71, 0xb1, 0x94, 0x35, 0x19, 0x60, 0x6b, 0xe1, 0x76, 0x70, 0xcf, 0x71, 0x52, 0x5b, 0x5c, 0x72, 0xf9, 0x17, 0xe9, 0x05, 0xdf, 0x34, 0x1e, 0x37, 0x4e, 0x06, 0xda, 0xb7, 0x4a, 0xf1, 0xee, 0xc6, 0xb2, 0x23, 0xe6, 0x14, 0xe7, 0xb1, 0x79, 0xa4, 0x07, 0x51, 0x13, 0xea, 0x01, 0xbb, 0x78, 0x4c, 0xdb, 0xef, 0xef, 0xd4, 0x62, 0x77, 0x31, 0x27, 0x50, 0x2e, 0x86, 0x00, 0x71, 0x0e, 0x21, 0x45, 0xa6, 0x0d, 0xce, 0x0f, 0xd3, 0xb4, 0x7a, 0xa1, 0xb9, 0xce, 0xab, 0x76, 0xbb],
            result: 480,
            final_range: 0x00ccb400,
            error: false,
            pcm_hash: 0x117c4e35,
            pcm_head: [936, -1021, -463, -402, -286, 1080, 923, -440],
        },
        ReferenceFrame {
            data: &[0x49, 0x51, 0xee, 0x2b, 0x5b, 0x09, 0xbb, 0xd2, 0xc8, 0x73, 0x0e, 0x19, 0x70, 0x0b, 0x27, 0x1b, 0xca, 0xf3, 0x07, 0x51, 0xfd, 0xc0, 0x13, 0xcb, 0x79, 0xdc, 0x56, 0xed, 0x6a, 0x31, 0x0f, 0xee, 0x69, 0x20, 0x2e, 0x6a, 0xd2, 0xfa, 0xf8, 0xba, 0x95, 0x9c, 0x95, 0xc7, 0x00, 0x2b, 0x2c, 0x57, 0xce, 0x10, 0x61, 0x47, 0x27, 0xe5, 0x0a, 0x38, 0xf0, 0x8c, 0x19, 0x8b, 0xc6, 0x0e, 0xda, 0xa8, 0xfc, 0xb9, 0x2c, 0x9d, 0x00, 0xf4, 0x51, 0x20, 0xb9, 0x81, 0x65, 0x4f, 0x90, 0xa9, 0x22, 0x5f, 0x26, 0x53, 0xf5, 0x8a, 0x59, 0xa3, 0xc5, 0xba, 0x28, 0x22],
            result: 480,
            final_range: 0x1c900e00,
            error: false,
            pcm_hash: 0xd04fcf6d,
            pcm_head: [905, 1072, -622, 162, -728, -216, -1884, -2078],
        },
        ReferenceFrame {
            data: &[0x1d, 0x28, 0x60, 0xfa, 0x05, 0xa5, 0x0b, 0x67, 0xcd, 0xf0, 0xd1, 0xec, 0x3b, 0x12, 0x8b, 0xb9, 0x55, 0xdb, 0x57, 0x23, 0xd0, 0x39, 0xab, 0xc1, 0xce, 0x15, 0x2b, 0x4a, 0x6d, 0x21, 0xc6, 0xb9, 0x8d, 0x8d, 0x22, 0xba, 0x7c, 0xce, 0x11, 0x0a, 0xbe, 0x9b, 0xa4, 0x3f, 0x43, 0x09, 0x00, 0xd1, 0xa0, 0x1c, 0xa8, 0xc0, 0xb7, 0x6c, 0x97, 0x1a, 0xe0, 0x1a, 0xbe, 0xc2, 0xed, 0x17, 0xc6, 0xed, 0xc7, 0x4b, 0x5d, 0x9e, 0xca, 0x21, 0x71, 0x7e, 0x9f, 0x91, 0xd0, 0x35, 0x19, 0xb7, 0x91, 0xa4, 0xe8, 0x16, 0xc1, 0xe6, 0xac, 0x7f, 0xee, 0x53, 0xd6, 0xf6],
            result: 480,
            final_range: 0x0e6d0900,
            error: false,
            pcm_hash: 0xb27f8e7f,
            pcm_head: [707, -2051, -17, -1211, 1118, 602, 371, -453],
        },
        ReferenceFrame {
            data: &[0x7d, 0xf6, 0xe8, 0xe4, 0x42, 0xcf, 0x9f, 0x67, 0x06, 0x68, 0xf8, 0xd2, 0x21, 0xb6, 0x71, 0xa0, 0xe4, 0x16, 0xcb, 0x29, 0x1f, 0x12, 0xad, 0xa6, 0xe9, 0xb0, 0x15, 0xcc, 0xb6, 0x51, 0x51, 0xde, 0x2b, 0xdf, 0xea, 0xb9, 0x8a, 0x30, 0xb8, 0x30, 0xfc, 0x10, 0x8d, 0x46, 0xea, 0xc7, 0x68, 0x6c, 0x46, 0xdd, 0x3b, 0x4c, 0x1b, 0x7d, 0x45, 0xa1, 0x63, 0x67, 0xd6, 0x2d, 0xe6, 0x65, 0x79, 0xa2, 0xb8, 0x39, 0x6c, 0xcf, 0xcc, 0xba, 0x9e, 0x47, 0x71, 0x18, 0x7f, 0x08, 0x05, 0xa7, 0x28, 0x17, 0x80, 0x1f, 0xe7, 0x1b, 0x90, 0x41, 0x26, 0x0f, 0x05, 0xc5],
            result: 480,
            final_range: 0x00c804cf,
            error: false,
            pcm_hash: 0x336096d3,
            pcm_head: [-119, -647, -58, 575, 332, 164, 534, -249],
        },
    ],
};

pub const STEREO_NOISY_2_5MS: ReferenceCase = ReferenceCase {
    sample_rate: 48000,
    channels: 2,
    stream_channels: 2,
    start_band: 0,
    frame_size: 120,
    frames: &[
        ReferenceFrame {
            data: &[0x79, 0xff, 0xf0, 0xf9, 0xd9, 0x07, 0xc6, 0x11, 0xb1, 0xd8, 0x99, 0x97, 0xcc, 0xd0, 0x69, 0xd0, 0x0c, 0xa4, 0xaf, 0xc3, 0x88, 0x56, 0x0a, 0x98, 0xbf, 0xb1, 0x7f, 0x73, 0x9b, 0x16, 0x85, 0x09, 0x1e, 0xd5, 0x2b, 0xa4, 0x1f, 0x5e, 0x0a, 0x34],
            result: 120,
            final_range: 0x00b5b3ae,
            error: false,
            pcm_hash: 0x8c561617,
            pcm_head: [0, 0, 1, 0, -3, -2, 2, 6],
        },
        ReferenceFrame {
            data: &[0x28, 0x04, 0x68, 0xc7, 0x90, 0x52, 0x26, 0xfb, 0x89, 0xa4, 0xdd, 0x91, 0xb9, 0x81, 0xb7, 0x64, 0x6f, 0x77, 0x97, 0x80, 0xcf, 0xbd, 0x77, 0x4d, 0x2b, 0x0c, 0x08, 0xef, 0x21, 0x89, 0x92, 0x57, 0xd4, 0xba, 0x2f, 0x53, 0x92, 0xd0, 0xff, 0xe5],
            result: 120,
            final_range: 0x02ccbd00,
            error: false,
            pcm_hash: 0xe77dfe11,
            pcm_head: [3, -1185, 2019, -1672, 3523, -751, 1782, -1545],
        },
        ReferenceFrame {
            data: &[0x3d, 0x71, 0x2d, 0xdc, 0xbc, 0x73, 0x28, 0xcb, 0xcb, 0xfe, 0x88, 0xc4, 0xca, 0xdc, 0xdd, 0x73, 0x3f, 0xf8, 0x48, 0xba, 0xbc, 0x3d, 0x2f, 0x56, 0x94, 0x13, 0x73, 0xca, 0xaf, 0x24, 0x25, 0x46, 0x2c, 0x06, 0xbb, 0x2d, 0x01, 0xdb, 0x9e, 0x2d],
            result: 120,
            final_range: 0x4c280400,
            error: false,
            pcm_hash: 0xeb024420,
            pcm_head: [-5289, 8872, -5574, 6127, -4120, 6824, -5576, 4180],
        },
        ReferenceFrame {
            data: &[0x4b, 0xc8, 0x35, 0xdf, 0x56, 0xa5, 0x61, 0x55, 0x49, 0xee, 0x5c, 0x94, 0xa2, 0xf2, 0x98, 0x4e, 0x3d, 0x09, 0x64, 0x7d, 0x5e, 0xf7, 0x7a, 0x92, 0x2d, 0x5b, 0x5c, 0x01, 0x32, 0x68, 0x14, 0x16, 0x59, 0xf2, 0x42, 0xb3, 0x58, 0xad, 0x2c, 0xb7],
            result: 120,
            final_range: 0x05f1a800,
            error: false,
            pcm_hash: 0xe0cf6e5f,
            pcm_head: [-2979, 758, -371, -744, 867, -2309, -112, -1895],
        },
        ReferenceFrame {
            data: &[0x56, 0xd4, 0x22, 0xae, 0xbc, 0xe6, 0x95, 0x48, 0x00, 0x62, 0x28, 0x36, 0x92, 0x68, 0x19, 0x06, 0x59, 0xc7, 0x21, 0x5a, 0x00, 0x30, 0x10, 0xda, 0x71, 0x80, 0xba, 0xc0, 0x91, 0x3b, 0x82, 0x3c, 0x88, 0x80, 0x1d, 0x36, 0x95, 0xbc, 0x62, 0xcd],
            result: 120,
            final_range: 0x326d9c00,
            error: false,
            pcm_hash: 0x5d1beaf3,
            pcm_head: [2481, -9048, 2994, -5897, 5125, -4709, 3582, -8782],
        },
        ReferenceFrame {
            data: &[0x22, 0x83, 0x9c, 0xad, 0x9f, 0xad, 0xd2, 0x9e, 0x8c, 0xfd, 0xe7, 0xc0, 0xe2, 0xbd, 0x02, 0x3a, 0x9c, 0x44, 0xb6, 0xd0, 0xa7, 0xd9, 0x8d, 0xa1, 0xd8, 0x9f, 0x72, 0x05, 0x4a, 0x0d, 0x68, 0x65, 0xc8, 0x8e, 0x75, 0x36, 0x29, 0x9b, 0x90, 0x79],
            result: 120,
            final_range: 0x00964700,
            error: false,
            pcm_hash: 0x987e62b1,
            pcm_head: [510, 1714, -4031, 926, -1928, 1765, 3973, 2021],
        },
    ],
};

pub const MONO_TONAL_16KHZ: ReferenceCase = ReferenceCase {
    sample_rate: 16000,
    channels: 1,
    stream_channels: 1,
    start_band: 0,
    frame_size: 320,
    frames: &[
        ReferenceFrame {
            data: &[0xca, 0x6f, 0xd8, 0xf5, 0x37, 0x20, 0x7c, 0x1e, 0x36, 0xe8, 0x70, 0xcb, 0x3d, 0xa0, 0xc0, 0xb8, 0x6b, 0x7a, 0x37, 0x0d, 0xe6, 0x69, 0x37, 0xcc, 0xaf, 0x15, 0x91, 0x8f, 0xaf, 0x26, 0xc4, 0xdc, 0x7d, 0xb5, 0x48, 0xe3, 0xb9, 0x19, 0xdd, 0x44, 0x19, 0xef, 0x30, 0xac, 0x95, 0x3d, 0x8c, 0x6d, 0x40, 0x60, 0x89, 0xcf, 0xc0, 0xe9, 0x95, 0xe2, 0xe5, 0x79, 0xba, 0xdb],
            result: 320,
            final_range: 0x00836473,
            error: false,
            pcm_hash: 0x4435b1ab,
            pcm_head: [0, 0, 1, 3, 5, 10, 17, 23],
        },
        ReferenceFrame {
            data: &[0xc8, 0x81, 0xd3, 0x95, 0x60, 0x13, 0xa6, 0xd9, 0x52, 0xdc, 0xb3, 0x12, 0x61, 0x9d, 0xc0, 0x68, 0xc8, 0x56, 0xd8, 0x12, 0x09, 0x5f, 0x43, 0xe1, 0x72, 0xbb, 0x93, 0xda, 0xca, 0x63, 0xd2, 0xf4, 0xa0, 0x60, 0x9f, 0x85, 0x1b, 0xd6, 0x9b, 0xb6, 0xf1, 0x32, 0xc8, 0x79, 0xc8, 0x0a, 0x8b, 0x56, 0xa6, 0x88, 0x17, 0xf2, 0xe9, 0x02, 0x1c, 0xaf, 0x52, 0xe2, 0xf7, 0x5b],
            result: 320,
            final_range: 0x303f0200,
            error: false,
            pcm_hash: 0xe9a88016,
            pcm_head: [-8982, -8675, -8237, -7674, -6997, -6213, -5329, -4360],
        },
        ReferenceFrame {
            data: &[0xc0, 0xee, 0xb8, 0xdf, 0xfd, 0x17, 0xd6, 0xc8, 0x33, 0xdb, 0xce, 0xe0, 0x28, 0xe6, 0xea, 0x3a, 0xa1, 0xa7, 0x6e, 0xde, 0x3a, 0xef, 0x50, 0x85, 0x84, 0xc1, 0x5a, 0x9a, 0x9f, 0xcc, 0x25, 0x3e, 0x08, 0x4d, 0x32, 0xcb, 0x9c, 0xe3, 0x1d, 0xf3, 0xa4, 0xaa, 0x53, 0xa7, 0xcf, 0xc4, 0x2a, 0x95, 0xa1, 0x75, 0xa9, 0x5b, 0xe8, 0x2e, 0x17, 0x5e, 0x4a, 0xeb, 0xbf, 0x5c],
            result: 320,
            final_range: 0x5e131a00,
            error: false,
            pcm_hash: 0x3b0b659c,
            pcm_head: [8063, 7554, 6997, 6407, 5800, 5191, 4591, 4015],
        },
        ReferenceFrame {
            data: &[0xc0, 0xee, 0x54, 0x06, 0x67, 0x69, 0x84, 0x5a, 0xaf, 0x24, 0x22, 0x8d, 0x1e, 0x56, 0x0c, 0xbc, 0xa8, 0xfd, 0xdb, 0x9a, 0x3a, 0x33, 0x18, 0x75, 0x80, 0xf0, 0xa7, 0xf4, 0x98, 0xf9, 0xda, 0x43, 0x37, 0xbe, 0xd5, 0xab, 0xa1, 0xfe, 0x9d, 0xb3, 0xc2, 0x54, 0xce, 0x01, 0x3e, 0xad, 0xcc, 0x67, 0x30, 0xab, 0x56, 0x04, 0x57, 0xfa, 0xe3, 0xa5, 0x7a, 0x62, 0x63, 0x5b],
            result: 320,
            final_range: 0x5c859800,
            error: false,
            pcm_hash: 0x779a9e98,
            pcm_head: [-3304, -3889, -4508, -5152, -5807, -6460, -7096, -7699],
        },
    ],
};

pub const STEREO_TO_MONO_5MS: ReferenceCase = ReferenceCase {
    sample_rate: 48000,
    channels: 1,
    stream_channels: 2,
    start_band: 0,
    frame_size: 240,
    frames: &[
        ReferenceFrame {
            data: &[0x7f, 0x42, 0x0a, 0xe1, 0xd9, 0x23, 0xf4, 0x62, 0xdb, 0xa5, 0xc7, 0x9a, 0x84, 0xd8, 0x1f, 0xab, 0xd5, 0x28, 0x99, 0x05, 0x63, 0x92, 0x6c, 0xe9, 0x9a, 0xf6, 0x16, 0xa4, 0xb1, 0xfa, 0x3a, 0xbf, 0xad, 0x49, 0xca, 0xc4, 0xe8, 0x27, 0x30, 0xf3, 0x4b, 0xb1, 0x79, 0xfa, 0x03, 0xad, 0xc3, 0xce, 0x85, 0xa4],
            result: 240,
            final_range: 0x03615c00,
            error: false,
            pcm_hash: 0xb8453391,
            pcm_head: [0, 0, 2, 1, -4, 0, 5, 9],
        },
        ReferenceFrame {
            data: &[0x24, 0x92, 0x6b, 0xea, 0x94, 0xf7, 0x1e, 0xeb, 0xa6, 0xfa, 0xc0, 0x8e, 0xec, 0x35, 0x0c, 0x06, 0xd8, 0xb4, 0x0a, 0x43, 0xa7, 0x6a, 0x39, 0xc4, 0x87, 0x57, 0x68, 0x8d, 0x10, 0x53, 0x20, 0x4b, 0x7b, 0x1b, 0xab, 0xd3, 0x80, 0xe3, 0x80, 0xa8, 0xd1, 0x38, 0x18, 0x2e, 0x1c, 0xb4, 0xc2, 0xe6, 0x6a, 0x30],
            result: 240,
            final_range: 0x1dbefc00,
            error: false,
            pcm_hash: 0x0d6aa64b,
            pcm_head: [-2655, 1095, -2780, -1348, 6417, 373, 540, -1986],
        },
        ReferenceFrame {
            data: &[0x07, 0x2c, 0xb2, 0xf0, 0xc2, 0x37, 0xba, 0xc7, 0x84, 0xa6, 0x59, 0xba, 0xc2, 0xae, 0x59, 0xdb, 0x73, 0xd9, 0xa7, 0xe0, 0x7c, 0x20, 0x90, 0x92, 0x65, 0x0e, 0x03, 0x80, 0x15, 0x7b, 0xdb, 0x0e, 0x8d, 0x0d, 0x20, 0x28, 0x9a, 0xdb, 0x8a, 0x17, 0x43, 0x8d, 0x77, 0xdd, 0xc1, 0x69, 0x83, 0xf8, 0xd0, 0x07],
            result: 240,
            final_range: 0x051aab00,
            error: false,
            pcm_hash: 0x597992d8,
            pcm_head: [-4435, -1291, -2, 2655, 2222, -3969, 1001, -652],
        },
        ReferenceFrame {
            data: &[0xd5, 0x6e, 0xa4, 0x16, 0x85, 0x47, 0xb6, 0xda, 0xd9, 0xe2, 0x39, 0x23, 0xec, 0x36, 0xc0, 0x20, 0x84, 0xde, 0x33, 0x0f, 0x4a, 0x57, 0x6d, 0xb6, 0x50, 0xc0, 0xd4, 0x9f, 0x5c, 0x6b, 0x61, 0x86, 0x00, 0x35, 0xe6, 0xab, 0x44, 0x32, 0x54, 0x9f, 0x1c, 0xcc, 0xe9, 0x90, 0x4e, 0xa0, 0xc7, 0xb9, 0xfa, 0xdd],
            result: 240,
            final_range: 0x03b14500,
            error: false,
            pcm_hash: 0x633db27b,
            pcm_head: [-2281, 959, 3267, 2518, -2157, -3259, 1567, -2057],
        },
        ReferenceFrame {
            data: &[0xd8, 0xe8, 0x13, 0xf1, 0x99, 0xc5, 0x62, 0x4a, 0xf8, 0x7f, 0x22, 0x15, 0xfd, 0xa2, 0x8a, 0x9c, 0x21, 0xc5, 0x4d, 0x7b, 0x28, 0xb0, 0xb3, 0xc6, 0xba, 0x50, 0x1a, 0xd5, 0x4d, 0xf8, 0x52, 0x23, 0xb2, 0x38, 0x5a, 0x0b, 0x33, 0x81, 0x77, 0x08, 0x9d, 0x5b, 0x4e, 0x28, 0x0f, 0x5c, 0x6b, 0xb1, 0x92, 0xe5],
            result: 240,
            final_range: 0x1f67a100,
            error: false,
            pcm_hash: 0xbcc8bafe,
            pcm_head: [-1771, -793, -2980, 1105, 2136, -3255, -2320, -2187],
        },
    ],
};

pub const MONO_TO_STEREO_20MS: ReferenceCase = ReferenceCase {
    sample_rate: 48000,
    channels: 2,
    stream_channels: 1,
    start_band: 0,
    frame_size: 960,
    frames: &[
        ReferenceFrame {
            data: &[0x7c, 0xb0, 0x68, 0x0e, 0xd6, 0xa5, 0x1d, 0x1a, 0x8f, 0x09, 0x3a, 0x9b, 0x95, 0x12, 0xdd, 0x03, 0x9e, 0xbb, 0x4b, 0x6c, 0x1f, 0xa1, 0x1a, 0xc9, 0x64, 0xa2, 0x7b, 0xbd, 0x94, 0xa9, 0x81, 0xb9, 0x81, 0xba, 0xb4, 0x3b, 0x07, 0x4d, 0xcf, 0xa7, 0xea, 0xf2, 0x89, 0x6f, 0x15, 0xd2, 0x2b, 0xd2, 0x4b, 0x0c, 0xb4, 0x9d, 0x74, 0x31, 0xb9, 0xc7, 0xbd, 0x72, 0x41, 0x20, 0x4e, 0x8e, 0x88, 0x1b, 0x07, 0x17, 0x73, 0xf1, 0x94, 0xef],
            result: 960,
            final_range: 0x04cf6500,
            error: false,
            pcm_hash: 0xe855453d,
            pcm_head: [0, 0, -1, -1, 0, 0, -3, -3],
        },
        ReferenceFrame {
            data: &[0x45, 0x3e, 0x0c, 0xd0, 0x3a, 0xdd, 0x48, 0xcf, 0x7a, 0x62, 0xc4, 0xaa, 0xd7, 0xa0, 0xdf, 0xe1, 0x50, 0x3c, 0x38, 0x5d, 0xff, 0x33, 0xfd, 0x70, 0x10, 0x33, 0xeb, 0x70, 0x1b, 0xd5, 0x5d, 0x56, 0x99, 0x9c, 0x15, 0xe6, 0x84, 0xec, 0x2b, 0x4d, 0x95, 0x2e, 0x45, 0x75, 0xb0, 0x72, 0xb0, 0x5e, 0x99, 0x91, 0x95, 0x7b, 0x9c, 0xd2, 0x26, 0xc3, 0x06, 0x62, 0x4c, 0xdf, 0x9d, 0xcd, 0x66, 0x20, 0x82, 0x6d, 0x1d, 0x74, 0xad, 0x2a],
            result: 960,
            final_range: 0x0438ee00,
            error: false,
            pcm_hash: 0xbc2b3355,
            pcm_head: [4354, 4354, 7127, 7127, 6024, 6024, 3213, 3213],
        },
        ReferenceFrame {
            data: &[0x0e, 0xde, 0x22, 0x46, 0xc5, 0xe3, 0xe2, 0xef, 0x61, 0x90, 0xaf, 0x30, 0xdf, 0x31, 0xd4, 0xa1, 0x8b, 0x27, 0x0f, 0xf3, 0xed, 0x04, 0xa1, 0x25, 0xc7, 0x22, 0x58, 0x09, 0x11, 0xe3, 0x91, 0x66, 0x68, 0x13, 0x32, 0x05, 0x2b, 0x53, 0x58, 0xf2, 0xc1, 0x62, 0x3d, 0xba, 0xce, 0xcd, 0x92, 0x89, 0xc5, 0xc0, 0x89, 0x9c, 0xb9, 0xa1, 0xf0, 0x5c, 0x56, 0x4e, 0xc3, 0x3e, 0x8a, 0x78, 0x8a, 0x7e, 0x3c, 0xe5, 0x74, 0x5b, 0x70, 0x54],
            result: 960,
            final_range: 0x008cbbc2,
            error: false,
            pcm_hash: 0xe5b57921,
            pcm_head: [4241, 4241, 7513, 7513, 6033, 6033, 6072, 6072],
        },
        ReferenceFrame {
            data: &[0x0e, 0xf6, 0x34, 0x2e, 0xdc, 0x4d, 0xc1, 0x36, 0x90, 0x10, 0x51, 0xc4, 0x03, 0x29, 0x07, 0x14, 0x69, 0x4e, 0x55, 0xf1, 0x45, 0xcb, 0x56, 0x1d, 0xa3, 0x08, 0x6d, 0xef, 0x5f, 0x78, 0x01, 0xa4, 0xc7, 0x65, 0xf3, 0x12, 0x9c, 0xd7, 0xb6, 0x79, 0x89, 0xc7, 0x0d, 0x51, 0x29, 0x4a, 0x7e, 0xd6, 0xc4, 0xa8, 0x7e, 0x51, 0x8c, 0xbb, 0xc4, 0xa8, 0xc4, 0xa7, 0x91, 0x7e, 0x8d, 0x45, 0xa8, 0x6b, 0xdd, 0x65, 0x1e, 0xc9, 0xd5, 0xcb],
            result: 960,
            final_range: 0x35421f00,
            error: false,
            pcm_hash: 0x4ddd157d,
            pcm_head: [5617, 5617, 5000, 5000, 8508, 8508, 9384, 9384],
        },
    ],
};

pub const HYBRID_START_17: ReferenceCase = ReferenceCase {
    sample_rate: 48000,
    channels: 2,
    stream_channels: 2,
    start_band: 17,
    frame_size: 960,
    frames: &[
        ReferenceFrame {
            data: &[0xff, 0xfd, 0x50, 0x2a, 0x9f, 0x53, 0x5e, 0x33, 0x83, 0x31, 0x30, 0x3a, 0x0c, 0x38, 0x4d, 0xcc, 0x61, 0x27, 0xab, 0xbb, 0xfe, 0xeb, 0x40, 0x57, 0x18, 0x16, 0x22, 0x50, 0xc2, 0xd0, 0xf2, 0x7e, 0x77, 0x02, 0x49, 0x47, 0x78, 0x44, 0x91, 0xac, 0x98, 0xfd, 0x27, 0xf5, 0x42, 0xc6, 0x64, 0x0b, 0xfa, 0xf0, 0xd4, 0xa8, 0xa8, 0x9e, 0x96, 0xc2, 0xa5, 0x0e, 0x46, 0xc9],
            result: 960,
            final_range: 0x07da2600,
            error: false,
            pcm_hash: 0x95f4b535,
            pcm_head: [0, 0, 1, 1, 1, 1, -1, -1],
        },
        ReferenceFrame {
            data: &[0xc3, 0xaa, 0x89, 0x94, 0xf7, 0x14, 0x9c, 0x8e, 0xd6, 0x02, 0x3a, 0xe5, 0x95, 0x1f, 0x44, 0x43, 0x85, 0x76, 0xcd, 0x76, 0x13, 0x1b, 0x83, 0x9b, 0x35, 0xaa, 0xa4, 0x51, 0xe6, 0x7b, 0x5b, 0x35, 0x12, 0x9b, 0xe0, 0xc7, 0x1a, 0x77, 0x11, 0x99, 0x75, 0x9c, 0x98, 0xd1, 0xef, 0x15, 0xe2, 0x9a, 0x0b, 0x48, 0x20, 0x4d, 0xfd, 0x39, 0x25, 0x0d, 0x20, 0x52, 0x31, 0xe0],
            result: 960,
            final_range: 0x01eac300,
            error: false,
            pcm_hash: 0x32559147,
            pcm_head: [-2184, -2184, 2076, 2076, 1412, 1412, -1888, -1887],
        },
        ReferenceFrame {
            data: &[0xc3, 0xd0, 0x83, 0x4a, 0x89, 0xfb, 0xb9, 0x76, 0x1d, 0x0d, 0x9c, 0xa9, 0xe5, 0xe1, 0x6c, 0x50, 0x6b, 0xe7, 0x62, 0x10, 0x10, 0xc4, 0xd0, 0x3e, 0x99, 0xdb, 0xf1, 0x99, 0xe2, 0xe8, 0x8a, 0x49, 0xac, 0x3e, 0xf2, 0x98, 0x3b, 0x32, 0x91, 0x86, 0x31, 0xd6, 0x4d, 0x2b, 0x46, 0x79, 0x9e, 0x4e, 0x94, 0x17, 0x2b, 0x36, 0x10, 0x6c, 0xdf, 0x4e, 0xf0, 0x55, 0x9d, 0x80],
            result: 960,
            final_range: 0x0441ec00,
            error: false,
            pcm_hash: 0xd9bd0657,
            pcm_head: [1229, 1770, 71, 31, -1485, -1429, 408, 78],
        },
        ReferenceFrame {
            data: &[0xc3, 0xd0, 0x77, 0x63, 0x2b, 0xa9, 0x26, 0x35, 0x84, 0xde, 0xab, 0xd7, 0xb9, 0x9f, 0xd9, 0x31, 0xb3, 0xe8, 0x4a, 0xb7, 0x7a, 0x5d, 0x95, 0xab, 0xe3, 0xd3, 0xde, 0x8c, 0x4d, 0x4e, 0x26, 0x5b, 0x13, 0x5b, 0x11, 0x3a, 0xec, 0x2f, 0xf3, 0x64, 0xff, 0xeb, 0xc3, 0xfd, 0x70, 0x13, 0x32, 0xcf, 0x35, 0x09, 0xaa, 0x80, 0x51, 0x85, 0x8a, 0xdb, 0x21, 0x59, 0x3d, 0xf9],
            result: 960,
            final_range: 0x17ce4a00,
            error: false,
            pcm_hash: 0x352f659d,
            pcm_head: [645, 2088, -677, -1981, -807, -1434, 1816, 1702],
        },
    ],
};

pub const STEREO_RANDOM_BYTES: ReferenceCase = ReferenceCase {
    sample_rate: 48000,
    channels: 2,
    stream_channels: 2,
    start_band: 0,
    frame_size: 960,
    frames: &[
        ReferenceFrame {
            data: &[0x55, 0xde, 0x72, 0x1d, 0x8b, 0xa7, 0xcd, 0x8c, 0xd1, 0xeb, 0xe3, 0x14, 0xce, 0xdf, 0xc6, 0x0c, 0x23, 0xe1, 0x12, 0x62, 0x5e, 0xdc, 0x03, 0x97, 0x2e, 0xe9, 0xc9, 0x06, 0xd6, 0x37, 0x19, 0x6a, 0xe4, 0x2e, 0x05, 0x9f, 0x23, 0xd0, 0x0e, 0xa9, 0xcf, 0x61, 0x79, 0xf4, 0x09, 0x48, 0xe0, 0xdc, 0x8c, 0x35, 0x09, 0x6d, 0x9f, 0x85, 0xfc, 0x6d, 0x4b, 0xe4, 0x50, 0x98, 0xce, 0x32, 0xc7, 0x2c],
            result: 960,
            final_range: 0x04328d00,
            error: false,
            pcm_hash: 0x49c938ae,
            pcm_head: [0, 0, -1, -1, -4, -1, -1, 2],
        },
        ReferenceFrame {
            data: &[0x51, 0xa8, 0x1b, 0xa6, 0xd7, 0x3c, 0x18, 0xcb, 0x76, 0x43, 0xec, 0xeb, 0xca, 0x56, 0xbb, 0x62, 0xa7, 0x78, 0x78, 0x61, 0x0f, 0x76, 0xf0, 0xed, 0x65, 0x8f, 0x28, 0x25, 0xe1, 0x55, 0xea, 0xc9, 0x44, 0xd4, 0x9c, 0xf9, 0xcd, 0xf3, 0x51, 0x3b, 0x6d, 0x19, 0x23, 0xc0, 0x38, 0x11, 0xc1, 0xe9, 0x1c, 0x30, 0x45, 0x06, 0xd6, 0xb5, 0x48, 0x5e, 0x23, 0x72, 0x39, 0x75, 0x34, 0xaa, 0xec, 0x8a],
            result: 960,
            final_range: 0x2d47da00,
            error: false,
            pcm_hash: 0xe39fbfcd,
            pcm_head: [-341, 422, -968, -28, -1767, -495, -1593, -681],
        },
        ReferenceFrame {
            data: &[0x65, 0x3b, 0x6f, 0x60, 0x2f, 0xfd, 0x23, 0x40, 0x5c, 0x6b, 0x08, 0x3c, 0x7b, 0x81, 0x58, 0xb7, 0x94, 0xe6, 0x59, 0x22, 0x1d, 0x4c, 0x6d, 0x09, 0x2d, 0x15, 0x6b, 0x4f, 0xf1, 0x38, 0x33, 0xb7, 0x5d, 0x63, 0x7e, 0xa5, 0x25, 0x63, 0xf4, 0x23, 0xec, 0xc1, 0x81, 0x27, 0xbb, 0xaf, 0xe9, 0x14, 0xb6, 0x23, 0x9b, 0x80, 0x0b, 0x42, 0xc5, 0x36, 0x2c, 0x00, 0xa6, 0x7c, 0x3f, 0x07, 0x28, 0x97],
            result: 960,
            final_range: 0x0eda9500,
            error: false,
            pcm_hash: 0x0b1380dc,
            pcm_head: [-115, -543, -143, -723, -136, -869, -149, -1058],
        },
        ReferenceFrame {
            data: &[0xd3, 0xd6, 0xaf, 0x8d, 0xd5, 0x2b, 0x2c, 0x2b, 0xc4, 0xa3, 0x77, 0x48, 0x21, 0xa1, 0xdd, 0x49, 0x2a, 0x6d, 0xf5, 0xe6, 0xc8, 0x9f, 0xb8, 0x2c, 0xc7, 0xbc, 0xd2, 0xc4, 0x46, 0x1e, 0x33, 0x73, 0x6f, 0x1a, 0xeb, 0xe3, 0x69, 0x5e, 0x35, 0xa1, 0x8c, 0x9a, 0xd2, 0x68, 0xd4, 0x60, 0x99, 0x9e, 0x99, 0x4e, 0x4d, 0x1d, 0x7d, 0x6b, 0xb0, 0x34, 0xa6, 0xcf, 0xd6, 0xee, 0x2f, 0x87, 0xbc, 0x92],
            result: 960,
            final_range: 0x00999d9b,
            error: false,
            pcm_hash: 0xbfcf01d8,
            pcm_head: [1066, -822, 1300, -806, 1545, -777, 1793, -749],
        },
        ReferenceFrame {
            data: &[0xda, 0xb9, 0x1a, 0x6d, 0x09, 0x05, 0x75, 0xcd, 0xec, 0x2c, 0x7a, 0x4e, 0xfc, 0xf5, 0x88, 0x5a, 0xa9, 0x4d, 0x8c, 0xec, 0x51, 0xae, 0x13, 0x95, 0x72, 0xc2, 0x9b, 0xc2, 0x21, 0x49, 0x2a, 0x3d, 0xbb, 0x3a, 0x23, 0xf3, 0xdb, 0x26, 0x56, 0xf6, 0x8d, 0xe3, 0x56, 0xc3, 0xc2, 0x66, 0x10, 0xc6, 0x05, 0xf1, 0x9a, 0x1b, 0x6c, 0x70, 0x4a, 0x98, 0xd2, 0x1e, 0x09, 0x09, 0x44, 0x6c, 0xe7, 0xbc],
            result: 960,
            final_range: 0x508cbb00,
            error: false,
            pcm_hash: 0x40271908,
            pcm_head: [-2283, -72, -1894, -70, -1643, -73, -1410, -70],
        },
        ReferenceFrame {
            data: &[0xba, 0x24, 0xf0, 0x3e, 0x09, 0xcb, 0x3e, 0x65, 0x16, 0x45, 0x50, 0x8e, 0x4d, 0xbd, 0x9b, 0x29, 0x52, 0xc4, 0x5f, 0x74, 0xf7, 0xb9, 0xbd, 0x84, 0x6e, 0x69, 0x08, 0x8b, 0xc1, 0xf9, 0x59, 0x56, 0x80, 0x01, 0x67, 0x16, 0xba, 0xfa, 0x96, 0x61, 0x30, 0xdc, 0x4e, 0x78, 0xc5, 0x01, 0x8f, 0xcc, 0x3a, 0x4d, 0xc3, 0xbd, 0x19, 0x91, 0xd4, 0xa2, 0xef, 0x2d, 0x7f, 0x0f, 0xbf, 0xf6, 0xe9, 0x54],
            result: 960,
            final_range: 0x01350e00,
            error: false,
            pcm_hash: 0x4c9655b5,
            pcm_head: [1082, 1086, 1753, 1075, 2329, 1053, 2885, 1029],
        },
    ],
};

pub const MONO_CORRUPTED_HEAD: ReferenceCase = ReferenceCase {
    sample_rate: 48000,
    channels: 1,
    stream_channels: 1,
    start_band: 0,
    frame_size: 960,
    frames: &[
        ReferenceFrame {
            data: &[0x7f, 0x85, 0x11, 0x73, 0x10, 0xaf, 0x1d, 0x93, 0xa1, 0x75, 0x14, 0x49, 0x34, 0x0c, 0x9e, 0x12, 0x86, 0x65, 0xb0, 0xc7, 0x4f, 0x0f, 0xad, 0xea, 0xdb, 0x32, 0x5d, 0xc7, 0x4d, 0xb8, 0xfe, 0x60, 0xac, 0xac, 0xf0, 0xc8, 0x63, 0x34, 0x38, 0x7e, 0x9e, 0xcd, 0x86, 0xc5, 0x4a, 0xf7, 0x25, 0xc8, 0xbb, 0x1f, 0x84, 0x2f, 0x02, 0x26, 0x9a, 0xf4, 0xee, 0xcb, 0x82, 0x48, 0x2a, 0x57, 0xd8, 0x84, 0xd7, 0x03, 0xf3, 0x40, 0x18, 0x18, 0xef, 0x21, 0x19, 0x7a, 0x6f, 0x12, 0xdc, 0xad, 0x73, 0xc0, 0x34, 0xe7, 0x7a, 0x8a, 0x00, 0xb6, 0x7f, 0x96, 0xf2, 0xc5, 0x93, 0x82, 0xb6, 0x3f, 0xd1, 0x5b, 0x74, 0x7b, 0x15, 0xe0],
            result: 960,
            final_range: 0x01e7c7d5,
            error: false,
            pcm_hash: 0x99b714e0,
            pcm_head: [0, 1, 1, -2, -10, -12, 19, 13],
        },
        ReferenceFrame {
            data: &[0x45, 0x4c, 0x57, 0x53, 0x57, 0x45, 0xdf, 0x36, 0x40, 0x70, 0x07, 0xee, 0x68, 0x0c, 0x21, 0xe6, 0x5d, 0x39, 0xae, 0x46, 0x6e, 0x7d, 0x27, 0x84, 0x8d, 0xa9, 0x86, 0x93, 0xbf, 0xd9, 0x48, 0x18, 0x30, 0xe1, 0xf2, 0x9e, 0xbe, 0xf7, 0x89, 0xe0, 0x20, 0xf9, 0x25, 0xa1, 0x45, 0x7b, 0x4a, 0x15, 0xd3, 0x43, 0x5d, 0xe0, 0x9a, 0x49, 0x21, 0xcc, 0x95, 0xde, 0x27, 0xaf, 0x52, 0x2b, 0x94, 0x32, 0x6e, 0x96, 0xf9, 0x1e, 0xb6, 0x1b, 0x03, 0x07, 0xe8, 0xf5, 0x10, 0x10, 0x0d, 0x5e, 0xee, 0xbe, 0xf7, 0x52, 0x7d, 0x9d, 0xf1, 0xed, 0xaf, 0xe8, 0xd5, 0x1f, 0x4d, 0x90, 0xe2, 0x60, 0x7f, 0x1f, 0xaf, 0x3a, 0xaa, 0xd5],
            result: 960,
            final_range: 0x04b40f00,
            error: false,
            pcm_hash: 0x20cb933d,
            pcm_head: [2467, 6743, 9158, 4032, 8826, 6727, 1342, 6379],
        },
        ReferenceFrame {
            data: &[0x0e, 0xe7, 0x6d, 0xe3, 0x7f, 0xe7, 0xc5, 0x06, 0x69, 0x68, 0xf6, 0xb9, 0xbe, 0xe2, 0xd9, 0xdc, 0xf0, 0x02, 0x5b, 0x3d, 0xbc, 0x18, 0x74, 0x4b, 0x6b, 0x7e, 0x5c, 0xbf, 0xd2, 0x78, 0x02, 0x0d, 0x20, 0x81, 0x7a, 0xdf, 0x2e, 0x6a, 0x21, 0x47, 0x7b, 0xbe, 0x9b, 0x6b, 0x52, 0x98, 0x0c, 0x7c, 0x7c, 0x9d, 0xd2, 0x0a, 0xa4, 0x55, 0x25, 0xf4, 0xcc, 0xe8, 0xda, 0xd0, 0x0b, 0x0b, 0x01, 0x23, 0x90, 0x5b, 0x44, 0x4f, 0xa9, 0x2d, 0x7d, 0xae, 0x95, 0x20, 0x77, 0xac, 0x37, 0xa7, 0xc2, 0x24, 0x33, 0xfc, 0x7a, 0xc7, 0xc2, 0x51, 0xb7, 0xec, 0x3a, 0x24, 0xbf, 0x4d, 0xe8, 0x8d, 0x79, 0x60, 0xb4, 0x75, 0xd9, 0xd3],
            result: 960,
            final_range: 0x0930b000,
            error: false,
            pcm_hash: 0x5fadab7c,
            pcm_head: [7057, 8187, 3057, 5103, 10125, -2151, 402, 9826],
        },
        ReferenceFrame {
            data: &[0x1d, 0xe7, 0xcc, 0xcc, 0xfa, 0x46, 0x1e, 0x6b, 0x8c, 0xb9, 0xa5, 0x59, 0x61, 0x78, 0x5c, 0x23, 0xe7, 0x31, 0x79, 0xe8, 0xfe, 0xfb, 0x7d, 0xab, 0xef, 0x3f, 0xbf, 0x3e, 0xf3, 0x46, 0x2f, 0xd9, 0x56, 0x36, 0xd6, 0xc7, 0x1f, 0xa6, 0x8d, 0xad, 0xc0, 0x30, 0xbc, 0x7c, 0x57, 0xdc, 0x61, 0x8a, 0x00, 0x05, 0x91, 0x43, 0xc8, 0x96, 0x49, 0x8d, 0xee, 0xea, 0x62, 0x05, 0xab, 0x64, 0x55, 0x0e, 0x25, 0x32, 0x59, 0xd5, 0x02, 0x2a, 0xb8, 0x52, 0x26, 0xd6, 0x50, 0x66, 0xdb, 0x0c, 0xed, 0x04, 0xe8, 0xb5, 0x8e, 0x77, 0xcf, 0x0c, 0x16, 0x39, 0x05, 0x1f, 0x4d, 0x90, 0x87, 0xb8, 0x6d, 0x47, 0x96, 0x10, 0x0c, 0x54],
            result: 960,
            final_range: 0x5a385a00,
            error: true,
            pcm_hash: 0xf46b0c82,
            pcm_head: [6228, 4886, 6755, 3995, 6144, 11471, 6912, 3944],
        },
    ],
};
