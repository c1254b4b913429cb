//! Pangrams from Markus Kuhn's "quickbrown.txt", with their AMF0 headers and
//! AMF3 encodings.

pub(crate) struct Pangram {
    pub name: &'static str,
    pub text: &'static str,
    /// AMF0 string marker and u16 byte length.
    pub amf0_header: [u8; 3],
    pub amf3: &'static [u8],
}

pub(crate) const PANGRAMS: &[Pangram] = &[
    Pangram {
        name: "Danish",
        text: "Quizdeltagerne spiste jordbær med fløde, mens cirkusklovnen Wolther spillede på xylofon",
        amf0_header: [2, 0, 90],
        amf3: &[
            6, 129, 53, 81, 117, 105, 122, 100, 101, 108, 116, 97, 103, 101, 114, 110,
            101, 32, 115, 112, 105, 115, 116, 101, 32, 106, 111, 114, 100, 98, 195, 166,
            114, 32, 109, 101, 100, 32, 102, 108, 195, 184, 100, 101, 44, 32, 109, 101,
            110, 115, 32, 99, 105, 114, 107, 117, 115, 107, 108, 111, 118, 110, 101, 110,
            32, 87, 111, 108, 116, 104, 101, 114, 32, 115, 112, 105, 108, 108, 101, 100,
            101, 32, 112, 195, 165, 32, 120, 121, 108, 111, 102, 111, 110,
        ],
    },
    Pangram {
        name: "German",
        text: "Falsches Üben von Xylophonmusik quält jeden größeren Zwerg",
        amf0_header: [2, 0, 62],
        amf3: &[
            6, 125, 70, 97, 108, 115, 99, 104, 101, 115, 32, 195, 156, 98, 101, 110,
            32, 118, 111, 110, 32, 88, 121, 108, 111, 112, 104, 111, 110, 109, 117, 115,
            105, 107, 32, 113, 117, 195, 164, 108, 116, 32, 106, 101, 100, 101, 110, 32,
            103, 114, 195, 182, 195, 159, 101, 114, 101, 110, 32, 90, 119, 101, 114, 103,
        ],
    },
    Pangram {
        name: "Greek",
        text: "Γαζέες καὶ μυρτιὲς δὲν θὰ βρῶ πιὰ στὸ χρυσαφὶ ξέφωτο",
        amf0_header: [2, 0, 103],
        amf3: &[
            6, 129, 79, 206, 147, 206, 177, 206, 182, 206, 173, 206, 181, 207, 130, 32,
            206, 186, 206, 177, 225, 189, 182, 32, 206, 188, 207, 133, 207, 129, 207, 132,
            206, 185, 225, 189, 178, 207, 130, 32, 206, 180, 225, 189, 178, 206, 189, 32,
            206, 184, 225, 189, 176, 32, 206, 178, 207, 129, 225, 191, 182, 32, 207, 128,
            206, 185, 225, 189, 176, 32, 207, 131, 207, 132, 225, 189, 184, 32, 207, 135,
            207, 129, 207, 133, 207, 131, 206, 177, 207, 134, 225, 189, 182, 32, 206, 190,
            206, 173, 207, 134, 207, 137, 207, 132, 206, 191,
        ],
    },
    Pangram {
        name: "English",
        text: "The quick brown fox jumps over the lazy dog",
        amf0_header: [2, 0, 43],
        amf3: &[
            6, 87, 84, 104, 101, 32, 113, 117, 105, 99, 107, 32, 98, 114, 111, 119,
            110, 32, 102, 111, 120, 32, 106, 117, 109, 112, 115, 32, 111, 118, 101, 114,
            32, 116, 104, 101, 32, 108, 97, 122, 121, 32, 100, 111, 103,
        ],
    },
    Pangram {
        name: "Spanish",
        text: "El pingüino Wenceslao hizo kilómetros bajo exhaustiva lluvia y",
        amf0_header: [2, 0, 64],
        amf3: &[
            6, 129, 1, 69, 108, 32, 112, 105, 110, 103, 195, 188, 105, 110, 111, 32,
            87, 101, 110, 99, 101, 115, 108, 97, 111, 32, 104, 105, 122, 111, 32, 107,
            105, 108, 195, 179, 109, 101, 116, 114, 111, 115, 32, 98, 97, 106, 111, 32,
            101, 120, 104, 97, 117, 115, 116, 105, 118, 97, 32, 108, 108, 117, 118, 105,
            97, 32, 121,
        ],
    },
    Pangram {
        name: "French",
        text: "l'île exiguë Où l'obèse jury mûr Fête l'haï volapük, Âne ex aéquo au whist, Ôtez ce vœu déçu",
        amf0_header: [2, 0, 106],
        amf3: &[
            6, 129, 85, 108, 39, 195, 174, 108, 101, 32, 101, 120, 105, 103, 117, 195,
            171, 32, 79, 195, 185, 32, 108, 39, 111, 98, 195, 168, 115, 101, 32, 106,
            117, 114, 121, 32, 109, 195, 187, 114, 32, 70, 195, 170, 116, 101, 32, 108,
            39, 104, 97, 195, 175, 32, 118, 111, 108, 97, 112, 195, 188, 107, 44, 32,
            195, 130, 110, 101, 32, 101, 120, 32, 97, 195, 169, 113, 117, 111, 32, 97,
            117, 32, 119, 104, 105, 115, 116, 44, 32, 195, 148, 116, 101, 122, 32, 99,
            101, 32, 118, 197, 147, 117, 32, 100, 195, 169, 195, 167, 117,
        ],
    },
    Pangram {
        name: "Irish Gaelic",
        text: "D'fhuascail Íosa, Úrmhac na hÓighe Beannaithe, pór Éava agus Ádhaimh",
        amf0_header: [2, 0, 74],
        amf3: &[
            6, 129, 21, 68, 39, 102, 104, 117, 97, 115, 99, 97, 105, 108, 32, 195,
            141, 111, 115, 97, 44, 32, 195, 154, 114, 109, 104, 97, 99, 32, 110, 97,
            32, 104, 195, 147, 105, 103, 104, 101, 32, 66, 101, 97, 110, 110, 97, 105,
            116, 104, 101, 44, 32, 112, 195, 179, 114, 32, 195, 137, 97, 118, 97, 32,
            97, 103, 117, 115, 32, 195, 129, 100, 104, 97, 105, 109, 104,
        ],
    },
    Pangram {
        name: "Hungarian",
        text: "Árvíztűrő tükörfúrógép",
        amf0_header: [2, 0, 31],
        amf3: &[
            6, 63, 195, 129, 114, 118, 195, 173, 122, 116, 197, 177, 114, 197, 145, 32,
            116, 195, 188, 107, 195, 182, 114, 102, 195, 186, 114, 195, 179, 103, 195, 169,
            112,
        ],
    },
    Pangram {
        name: "Icelandic",
        text: "Kæmi ný öxi hér ykist þjófum nú bæði víl og ádrepa",
        amf0_header: [2, 0, 61],
        amf3: &[
            6, 123, 75, 195, 166, 109, 105, 32, 110, 195, 189, 32, 195, 182, 120, 105,
            32, 104, 195, 169, 114, 32, 121, 107, 105, 115, 116, 32, 195, 190, 106, 195,
            179, 102, 117, 109, 32, 110, 195, 186, 32, 98, 195, 166, 195, 176, 105, 32,
            118, 195, 173, 108, 32, 111, 103, 32, 195, 161, 100, 114, 101, 112, 97,
        ],
    },
    Pangram {
        name: "Japanese (Hiragana)",
        text: "いろはにほへとちりぬるをわかよたれそつねならむうゐのおくやまけふこえてあさきゆめみしゑひもせす",
        amf0_header: [2, 0, 141],
        amf3: &[
            6, 130, 27, 227, 129, 132, 227, 130, 141, 227, 129, 175, 227, 129, 171, 227,
            129, 187, 227, 129, 184, 227, 129, 168, 227, 129, 161, 227, 130, 138, 227, 129,
            172, 227, 130, 139, 227, 130, 146, 227, 130, 143, 227, 129, 139, 227, 130, 136,
            227, 129, 159, 227, 130, 140, 227, 129, 157, 227, 129, 164, 227, 129, 173, 227,
            129, 170, 227, 130, 137, 227, 130, 128, 227, 129, 134, 227, 130, 144, 227, 129,
            174, 227, 129, 138, 227, 129, 143, 227, 130, 132, 227, 129, 190, 227, 129, 145,
            227, 129, 181, 227, 129, 147, 227, 129, 136, 227, 129, 166, 227, 129, 130, 227,
            129, 149, 227, 129, 141, 227, 130, 134, 227, 130, 129, 227, 129, 191, 227, 129,
            151, 227, 130, 145, 227, 129, 178, 227, 130, 130, 227, 129, 155, 227, 129, 153,
        ],
    },
    Pangram {
        name: "Japanese (Katakana)",
        text: "イロハニホヘト チリヌルヲ ワカヨタレソ ツネナラム ウヰノオクヤマ ケフコエテ アサキユメミシ ヱヒモセスン",
        amf0_header: [2, 0, 151],
        amf3: &[
            6, 130, 47, 227, 130, 164, 227, 131, 173, 227, 131, 143, 227, 131, 139, 227,
            131, 155, 227, 131, 152, 227, 131, 136, 32, 227, 131, 129, 227, 131, 170, 227,
            131, 140, 227, 131, 171, 227, 131, 178, 32, 227, 131, 175, 227, 130, 171, 227,
            131, 168, 227, 130, 191, 227, 131, 172, 227, 130, 189, 32, 227, 131, 132, 227,
            131, 141, 227, 131, 138, 227, 131, 169, 227, 131, 160, 32, 227, 130, 166, 227,
            131, 176, 227, 131, 142, 227, 130, 170, 227, 130, 175, 227, 131, 164, 227, 131,
            158, 32, 227, 130, 177, 227, 131, 149, 227, 130, 179, 227, 130, 168, 227, 131,
            134, 32, 227, 130, 162, 227, 130, 181, 227, 130, 173, 227, 131, 166, 227, 131,
            161, 227, 131, 159, 227, 130, 183, 32, 227, 131, 177, 227, 131, 146, 227, 131,
            162, 227, 130, 187, 227, 130, 185, 227, 131, 179,
        ],
    },
    Pangram {
        name: "Hebrew",
        text: "דג סקרן שט בים מאוכזב ולפתע מצא לו חברה איך הקליטה",
        amf0_header: [2, 0, 90],
        amf3: &[
            6, 129, 53, 215, 147, 215, 146, 32, 215, 161, 215, 167, 215, 168, 215, 159,
            32, 215, 169, 215, 152, 32, 215, 145, 215, 153, 215, 157, 32, 215, 158, 215,
            144, 215, 149, 215, 155, 215, 150, 215, 145, 32, 215, 149, 215, 156, 215, 164,
            215, 170, 215, 162, 32, 215, 158, 215, 166, 215, 144, 32, 215, 156, 215, 149,
            32, 215, 151, 215, 145, 215, 168, 215, 148, 32, 215, 144, 215, 153, 215, 154,
            32, 215, 148, 215, 167, 215, 156, 215, 153, 215, 152, 215, 148,
        ],
    },
    Pangram {
        name: "Polish",
        text: "Pchnąć w tę łódź jeża lub ośm skrzyń fig",
        amf0_header: [2, 0, 49],
        amf3: &[
            6, 99, 80, 99, 104, 110, 196, 133, 196, 135, 32, 119, 32, 116, 196, 153,
            32, 197, 130, 195, 179, 100, 197, 186, 32, 106, 101, 197, 188, 97, 32, 108,
            117, 98, 32, 111, 197, 155, 109, 32, 115, 107, 114, 122, 121, 197, 132, 32,
            102, 105, 103,
        ],
    },
    Pangram {
        name: "Russian",
        text: "В чащах юга жил бы цитрус? Да, но фальшивый экземпляр!",
        amf0_header: [2, 0, 96],
        amf3: &[
            6, 129, 65, 208, 146, 32, 209, 135, 208, 176, 209, 137, 208, 176, 209, 133,
            32, 209, 142, 208, 179, 208, 176, 32, 208, 182, 208, 184, 208, 187, 32, 208,
            177, 209, 139, 32, 209, 134, 208, 184, 209, 130, 209, 128, 209, 131, 209, 129,
            63, 32, 208, 148, 208, 176, 44, 32, 208, 189, 208, 190, 32, 209, 132, 208,
            176, 208, 187, 209, 140, 209, 136, 208, 184, 208, 178, 209, 139, 208, 185, 32,
            209, 141, 208, 186, 208, 183, 208, 181, 208, 188, 208, 191, 208, 187, 209, 143,
            209, 128, 33,
        ],
    },
];
