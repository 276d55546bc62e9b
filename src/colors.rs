use crate::Color;

/// Returns a color by its [recognized keyword name].
///
/// The name must already be lowercased.
///
/// [recognized keyword name]: https://www.w3.org/TR/SVG11/types.html#ColorKeywords
pub(crate) fn from_str(name: &str) -> Option<Color> {
    let c = match name {
        "aliceblue" => Color::new_rgb(240, 248, 255),
        "antiquewhite" => Color::new_rgb(250, 235, 215),
        "aqua" => Color::new_rgb(0, 255, 255),
        "aquamarine" => Color::new_rgb(127, 255, 212),
        "azure" => Color::new_rgb(240, 255, 255),
        "beige" => Color::new_rgb(245, 245, 220),
        "bisque" => Color::new_rgb(255, 228, 196),
        "black" => Color::new_rgb(0, 0, 0),
        "blanchedalmond" => Color::new_rgb(255, 235, 205),
        "blue" => Color::new_rgb(0, 0, 255),
        "blueviolet" => Color::new_rgb(138, 43, 226),
        "brown" => Color::new_rgb(165, 42, 42),
        "burlywood" => Color::new_rgb(222, 184, 135),
        "cadetblue" => Color::new_rgb(95, 158, 160),
        "chartreuse" => Color::new_rgb(127, 255, 0),
        "chocolate" => Color::new_rgb(210, 105, 30),
        "coral" => Color::new_rgb(255, 127, 80),
        "cornflowerblue" => Color::new_rgb(100, 149, 237),
        "cornsilk" => Color::new_rgb(255, 248, 220),
        "crimson" => Color::new_rgb(220, 20, 60),
        "cyan" => Color::new_rgb(0, 255, 255),
        "darkblue" => Color::new_rgb(0, 0, 139),
        "darkcyan" => Color::new_rgb(0, 139, 139),
        "darkgoldenrod" => Color::new_rgb(184, 134, 11),
        "darkgray" => Color::new_rgb(169, 169, 169),
        "darkgreen" => Color::new_rgb(0, 100, 0),
        "darkgrey" => Color::new_rgb(169, 169, 169),
        "darkkhaki" => Color::new_rgb(189, 183, 107),
        "darkmagenta" => Color::new_rgb(139, 0, 139),
        "darkolivegreen" => Color::new_rgb(85, 107, 47),
        "darkorange" => Color::new_rgb(255, 140, 0),
        "darkorchid" => Color::new_rgb(153, 50, 204),
        "darkred" => Color::new_rgb(139, 0, 0),
        "darksalmon" => Color::new_rgb(233, 150, 122),
        "darkseagreen" => Color::new_rgb(143, 188, 143),
        "darkslateblue" => Color::new_rgb(72, 61, 139),
        "darkslategray" => Color::new_rgb(47, 79, 79),
        "darkslategrey" => Color::new_rgb(47, 79, 79),
        "darkturquoise" => Color::new_rgb(0, 206, 209),
        "darkviolet" => Color::new_rgb(148, 0, 211),
        "deeppink" => Color::new_rgb(255, 20, 147),
        "deepskyblue" => Color::new_rgb(0, 191, 255),
        "dimgray" => Color::new_rgb(105, 105, 105),
        "dimgrey" => Color::new_rgb(105, 105, 105),
        "dodgerblue" => Color::new_rgb(30, 144, 255),
        "firebrick" => Color::new_rgb(178, 34, 34),
        "floralwhite" => Color::new_rgb(255, 250, 240),
        "forestgreen" => Color::new_rgb(34, 139, 34),
        "fuchsia" => Color::new_rgb(255, 0, 255),
        "gainsboro" => Color::new_rgb(220, 220, 220),
        "ghostwhite" => Color::new_rgb(248, 248, 255),
        "gold" => Color::new_rgb(255, 215, 0),
        "goldenrod" => Color::new_rgb(218, 165, 32),
        "gray" => Color::new_rgb(128, 128, 128),
        "grey" => Color::new_rgb(128, 128, 128),
        "green" => Color::new_rgb(0, 128, 0),
        "greenyellow" => Color::new_rgb(173, 255, 47),
        "honeydew" => Color::new_rgb(240, 255, 240),
        "hotpink" => Color::new_rgb(255, 105, 180),
        "indianred" => Color::new_rgb(205, 92, 92),
        "indigo" => Color::new_rgb(75, 0, 130),
        "ivory" => Color::new_rgb(255, 255, 240),
        "khaki" => Color::new_rgb(240, 230, 140),
        "lavender" => Color::new_rgb(230, 230, 250),
        "lavenderblush" => Color::new_rgb(255, 240, 245),
        "lawngreen" => Color::new_rgb(124, 252, 0),
        "lemonchiffon" => Color::new_rgb(255, 250, 205),
        "lightblue" => Color::new_rgb(173, 216, 230),
        "lightcoral" => Color::new_rgb(240, 128, 128),
        "lightcyan" => Color::new_rgb(224, 255, 255),
        "lightgoldenrodyellow" => Color::new_rgb(250, 250, 210),
        "lightgray" => Color::new_rgb(211, 211, 211),
        "lightgreen" => Color::new_rgb(144, 238, 144),
        "lightgrey" => Color::new_rgb(211, 211, 211),
        "lightpink" => Color::new_rgb(255, 182, 193),
        "lightsalmon" => Color::new_rgb(255, 160, 122),
        "lightseagreen" => Color::new_rgb(32, 178, 170),
        "lightskyblue" => Color::new_rgb(135, 206, 250),
        "lightslategray" => Color::new_rgb(119, 136, 153),
        "lightslategrey" => Color::new_rgb(119, 136, 153),
        "lightsteelblue" => Color::new_rgb(176, 196, 222),
        "lightyellow" => Color::new_rgb(255, 255, 224),
        "lime" => Color::new_rgb(0, 255, 0),
        "limegreen" => Color::new_rgb(50, 205, 50),
        "linen" => Color::new_rgb(250, 240, 230),
        "magenta" => Color::new_rgb(255, 0, 255),
        "maroon" => Color::new_rgb(128, 0, 0),
        "mediumaquamarine" => Color::new_rgb(102, 205, 170),
        "mediumblue" => Color::new_rgb(0, 0, 205),
        "mediumorchid" => Color::new_rgb(186, 85, 211),
        "mediumpurple" => Color::new_rgb(147, 112, 219),
        "mediumseagreen" => Color::new_rgb(60, 179, 113),
        "mediumslateblue" => Color::new_rgb(123, 104, 238),
        "mediumspringgreen" => Color::new_rgb(0, 250, 154),
        "mediumturquoise" => Color::new_rgb(72, 209, 204),
        "mediumvioletred" => Color::new_rgb(199, 21, 133),
        "midnightblue" => Color::new_rgb(25, 25, 112),
        "mintcream" => Color::new_rgb(245, 255, 250),
        "mistyrose" => Color::new_rgb(255, 228, 225),
        "moccasin" => Color::new_rgb(255, 228, 181),
        "navajowhite" => Color::new_rgb(255, 222, 173),
        "navy" => Color::new_rgb(0, 0, 128),
        "oldlace" => Color::new_rgb(253, 245, 230),
        "olive" => Color::new_rgb(128, 128, 0),
        "olivedrab" => Color::new_rgb(107, 142, 35),
        "orange" => Color::new_rgb(255, 165, 0),
        "orangered" => Color::new_rgb(255, 69, 0),
        "orchid" => Color::new_rgb(218, 112, 214),
        "palegoldenrod" => Color::new_rgb(238, 232, 170),
        "palegreen" => Color::new_rgb(152, 251, 152),
        "paleturquoise" => Color::new_rgb(175, 238, 238),
        "palevioletred" => Color::new_rgb(219, 112, 147),
        "papayawhip" => Color::new_rgb(255, 239, 213),
        "peachpuff" => Color::new_rgb(255, 218, 185),
        "peru" => Color::new_rgb(205, 133, 63),
        "pink" => Color::new_rgb(255, 192, 203),
        "plum" => Color::new_rgb(221, 160, 221),
        "powderblue" => Color::new_rgb(176, 224, 230),
        "purple" => Color::new_rgb(128, 0, 128),
        "red" => Color::new_rgb(255, 0, 0),
        "rosybrown" => Color::new_rgb(188, 143, 143),
        "royalblue" => Color::new_rgb(65, 105, 225),
        "saddlebrown" => Color::new_rgb(139, 69, 19),
        "salmon" => Color::new_rgb(250, 128, 114),
        "sandybrown" => Color::new_rgb(244, 164, 96),
        "seagreen" => Color::new_rgb(46, 139, 87),
        "seashell" => Color::new_rgb(255, 245, 238),
        "sienna" => Color::new_rgb(160, 82, 45),
        "silver" => Color::new_rgb(192, 192, 192),
        "skyblue" => Color::new_rgb(135, 206, 235),
        "slateblue" => Color::new_rgb(106, 90, 205),
        "slategray" => Color::new_rgb(112, 128, 144),
        "slategrey" => Color::new_rgb(112, 128, 144),
        "snow" => Color::new_rgb(255, 250, 250),
        "springgreen" => Color::new_rgb(0, 255, 127),
        "steelblue" => Color::new_rgb(70, 130, 180),
        "tan" => Color::new_rgb(210, 180, 140),
        "teal" => Color::new_rgb(0, 128, 128),
        "thistle" => Color::new_rgb(216, 191, 216),
        "tomato" => Color::new_rgb(255, 99, 71),
        "turquoise" => Color::new_rgb(64, 224, 208),
        "violet" => Color::new_rgb(238, 130, 238),
        "wheat" => Color::new_rgb(245, 222, 179),
        "white" => Color::new_rgb(255, 255, 255),
        "whitesmoke" => Color::new_rgb(245, 245, 245),
        "yellow" => Color::new_rgb(255, 255, 0),
        "yellowgreen" => Color::new_rgb(154, 205, 50),
        _ => return None,
    };

    Some(c)
}
