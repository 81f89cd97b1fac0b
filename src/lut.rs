// One full period of sine, sampled at i * TAU / 256

pub const SIN_SAMPLES: usize = 256;

pub const SIN_TABLE: [f32; SIN_SAMPLES] = [
    0.0, 0.024541229009628296, 0.049067676067352295, 0.0735645666718483,
    0.0980171412229538, 0.12241067737340927, 0.1467304676771164, 0.1709618866443634,
    0.19509032368659973, 0.21910123527050018, 0.24298018217086792, 0.2667127549648285,
    0.290284663438797, 0.3136817514896393, 0.3368898630142212, 0.3598950505256653,
    0.3826834261417389, 0.40524131059646606, 0.4275550842285156, 0.4496113359928131,
    0.4713967442512512, 0.49289819598197937, 0.5141027569770813, 0.5349976420402527,
    0.5555702447891235, 0.5758081674575806, 0.5956993103027344, 0.6152315735816956,
    0.6343932747840881, 0.6531728506088257, 0.6715589761734009, 0.6895405650138855,
    0.7071067690849304, 0.7242470979690552, 0.7409511208534241, 0.7572088241577148,
    0.7730104327201843, 0.7883464097976685, 0.803207516670227, 0.8175848126411438,
    0.8314695954322815, 0.8448535799980164, 0.8577286005020142, 0.8700869679450989,
    0.8819212913513184, 0.89322429895401, 0.903989315032959, 0.91420978307724,
    0.9238795042037964, 0.9329928159713745, 0.9415440559387207, 0.949528157711029,
    0.9569403529167175, 0.9637760519981384, 0.9700312614440918, 0.9757021069526672,
    0.9807852506637573, 0.9852776527404785, 0.9891765117645264, 0.9924795627593994,
    0.9951847195625305, 0.9972904324531555, 0.9987954497337341, 0.99969881772995,
    1.0, 0.99969881772995, 0.9987954497337341, 0.9972904324531555,
    0.9951847195625305, 0.9924795627593994, 0.9891765117645264, 0.9852776527404785,
    0.9807852506637573, 0.9757021069526672, 0.9700312614440918, 0.9637760519981384,
    0.9569403529167175, 0.949528157711029, 0.9415440559387207, 0.9329928159713745,
    0.9238795042037964, 0.91420978307724, 0.903989315032959, 0.89322429895401,
    0.8819212913513184, 0.8700869679450989, 0.8577286005020142, 0.8448535799980164,
    0.8314695954322815, 0.8175848126411438, 0.803207516670227, 0.7883464097976685,
    0.7730104327201843, 0.7572088241577148, 0.7409511208534241, 0.7242470979690552,
    0.7071067690849304, 0.6895405650138855, 0.6715589761734009, 0.6531728506088257,
    0.6343932747840881, 0.6152315735816956, 0.5956993103027344, 0.5758081674575806,
    0.5555702447891235, 0.5349976420402527, 0.5141027569770813, 0.49289819598197937,
    0.4713967442512512, 0.4496113359928131, 0.4275550842285156, 0.40524131059646606,
    0.3826834261417389, 0.3598950505256653, 0.3368898630142212, 0.3136817514896393,
    0.290284663438797, 0.2667127549648285, 0.24298018217086792, 0.21910123527050018,
    0.19509032368659973, 0.1709618866443634, 0.1467304676771164, 0.12241067737340927,
    0.0980171412229538, 0.0735645666718483, 0.049067676067352295, 0.024541229009628296,
    1.2246468525851679e-16, -0.024541229009628296, -0.049067676067352295, -0.0735645666718483,
    -0.0980171412229538, -0.12241067737340927, -0.1467304676771164, -0.1709618866443634,
    -0.19509032368659973, -0.21910123527050018, -0.24298018217086792, -0.2667127549648285,
    -0.290284663438797, -0.3136817514896393, -0.3368898630142212, -0.3598950505256653,
    -0.3826834261417389, -0.40524131059646606, -0.4275550842285156, -0.4496113359928131,
    -0.4713967442512512, -0.49289819598197937, -0.5141027569770813, -0.5349976420402527,
    -0.5555702447891235, -0.5758081674575806, -0.5956993103027344, -0.6152315735816956,
    -0.6343932747840881, -0.6531728506088257, -0.6715589761734009, -0.6895405650138855,
    -0.7071067690849304, -0.7242470979690552, -0.7409511208534241, -0.7572088241577148,
    -0.7730104327201843, -0.7883464097976685, -0.803207516670227, -0.8175848126411438,
    -0.8314695954322815, -0.8448535799980164, -0.8577286005020142, -0.8700869679450989,
    -0.8819212913513184, -0.89322429895401, -0.903989315032959, -0.91420978307724,
    -0.9238795042037964, -0.9329928159713745, -0.9415440559387207, -0.949528157711029,
    -0.9569403529167175, -0.9637760519981384, -0.9700312614440918, -0.9757021069526672,
    -0.9807852506637573, -0.9852776527404785, -0.9891765117645264, -0.9924795627593994,
    -0.9951847195625305, -0.9972904324531555, -0.9987954497337341, -0.99969881772995,
    -1.0, -0.99969881772995, -0.9987954497337341, -0.9972904324531555,
    -0.9951847195625305, -0.9924795627593994, -0.9891765117645264, -0.9852776527404785,
    -0.9807852506637573, -0.9757021069526672, -0.9700312614440918, -0.9637760519981384,
    -0.9569403529167175, -0.949528157711029, -0.9415440559387207, -0.9329928159713745,
    -0.9238795042037964, -0.91420978307724, -0.903989315032959, -0.89322429895401,
    -0.8819212913513184, -0.8700869679450989, -0.8577286005020142, -0.8448535799980164,
    -0.8314695954322815, -0.8175848126411438, -0.803207516670227, -0.7883464097976685,
    -0.7730104327201843, -0.7572088241577148, -0.7409511208534241, -0.7242470979690552,
    -0.7071067690849304, -0.6895405650138855, -0.6715589761734009, -0.6531728506088257,
    -0.6343932747840881, -0.6152315735816956, -0.5956993103027344, -0.5758081674575806,
    -0.5555702447891235, -0.5349976420402527, -0.5141027569770813, -0.49289819598197937,
    -0.4713967442512512, -0.4496113359928131, -0.4275550842285156, -0.40524131059646606,
    -0.3826834261417389, -0.3598950505256653, -0.3368898630142212, -0.3136817514896393,
    -0.290284663438797, -0.2667127549648285, -0.24298018217086792, -0.21910123527050018,
    -0.19509032368659973, -0.1709618866443634, -0.1467304676771164, -0.12241067737340927,
    -0.0980171412229538, -0.0735645666718483, -0.049067676067352295, -0.024541229009628296,
];
